use std::process::ExitStatus;
use thiserror::Error;

use crate::stage::Stage;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the template directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to read input. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Could not resolve a project name.")]
    ProjectNameMissing,

    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    #[error("Directory {name} already exists and is not empty.")]
    DirectoryNotEmptyError { name: String },

    /// The bundled template is missing, which means the tool was packaged incorrectly.
    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot copy '{source_path}' to '{target_path}'. Original error: {e}")]
    CopyError { source_path: String, target_path: String, e: std::io::Error },

    #[error("Failed to start `{command}`. Original error: {e}")]
    CommandSpawnError { command: String, e: std::io::Error },

    /// The external program ran but exited unsuccessfully.
    #[error("`{command}` failed with status: {status}{}", format_stderr(.stderr))]
    CommandFailedError { command: String, status: ExitStatus, stderr: String },

    #[error("{}: {source}", .stage.failure_message())]
    StageFailed { stage: Stage, source: Box<Error> },
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{stderr}")
    }
}

impl Error {
    /// Attaches the orchestrator stage that produced this error.
    pub fn in_stage(self, stage: Stage) -> Self {
        Error::StageFailed { stage, source: Box::new(self) }
    }
}

/// Convenience type alias for Results with this crate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", console::style(&err).red());
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
