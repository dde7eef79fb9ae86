use crate::{config::PackageManager, constants::verbosity};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for create-dib-app.
#[derive(Parser, Debug, Clone)]
#[command(name = "create-dib-app", author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project; asked for interactively when omitted.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Accept the suggested project name instead of prompting.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Package manager used to install dependencies.
    #[arg(long = "package-manager", value_enum, default_value_t = PackageManager::Npm)]
    pub package_manager: PackageManager,

    /// Do not install dependencies.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Do not initialize a git repository.
    #[arg(long = "skip-git")]
    pub skip_git: bool,

    /// Use a different template directory than the bundled one.
    #[arg(long = "template-dir", value_name = "PATH")]
    pub template_dir: Option<PathBuf>,
}

/// Parse command line arguments. `--help`, `--version` and usage errors exit here.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
