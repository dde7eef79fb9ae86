//! Run configuration resolved from command-line flags and the environment.

use clap::ValueEnum;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::{
    cli::Args,
    constants::{env, TEMPLATE_DIR},
    error::Result,
    external::ExternalCommand,
};

/// Package managers the generated project can be installed with.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    pub fn install_command(&self) -> ExternalCommand {
        ExternalCommand::new(self.program(), &["install"])
    }

    /// How a user runs a `package.json` script with this package manager.
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm | PackageManager::Bun => format!("{} run {script}", self.program()),
            PackageManager::Pnpm | PackageManager::Yarn => format!("{} {script}", self.program()),
        }
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Everything a run needs besides the project name.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory the project directory is created in.
    pub working_dir: PathBuf,
    pub template_dir: PathBuf,
    pub package_manager: PackageManager,
    pub install_command: ExternalCommand,
    pub git_program: String,
    pub skip_install: bool,
    pub skip_git: bool,
    pub non_interactive: bool,
}

impl Settings {
    pub fn new<W: Into<PathBuf>, T: Into<PathBuf>>(working_dir: W, template_dir: T) -> Self {
        let package_manager = PackageManager::default();
        Self {
            working_dir: working_dir.into(),
            template_dir: template_dir.into(),
            package_manager,
            install_command: package_manager.install_command(),
            git_program: "git".to_string(),
            skip_install: false,
            skip_git: false,
            non_interactive: false,
        }
    }

    /// Resolves settings for a CLI run.
    ///
    /// Flags win over environment variables, which win over defaults.
    pub fn from_args(args: &Args) -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let template_dir = args
            .template_dir
            .clone()
            .or_else(|| env_override(env::TEMPLATE_DIR).map(PathBuf::from))
            .unwrap_or_else(default_template_dir);

        let mut settings = Self::new(working_dir, template_dir)
            .with_package_manager(args.package_manager);
        if let Some(command) =
            env_override(env::INSTALL_COMMAND).and_then(|line| ExternalCommand::parse(&line))
        {
            settings.install_command = command;
        }
        if let Some(git) = env_override(env::GIT) {
            settings.git_program = git;
        }
        settings.skip_install = args.skip_install;
        settings.skip_git = args.skip_git;
        settings.non_interactive = args.non_interactive;

        log::debug!("Resolved settings: {settings:?}");
        Ok(settings)
    }

    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self.install_command = package_manager.install_command();
        self
    }

    pub fn with_install_command(mut self, command: ExternalCommand) -> Self {
        self.install_command = command;
        self
    }

    pub fn with_git_program<S: Into<String>>(mut self, git: S) -> Self {
        self.git_program = git.into();
        self
    }

    pub fn skipping_install(mut self) -> Self {
        self.skip_install = true;
        self
    }

    pub fn skipping_git(mut self) -> Self {
        self.skip_git = true;
        self
    }
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// The template shipped next to the executable, falling back to the source tree.
pub fn default_template_dir() -> PathBuf {
    let next_to_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATE_DIR)));
    match next_to_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR),
    }
}
