use std::fmt::Display;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::{
    constants::INITIAL_COMMIT_MESSAGE,
    error::{Error, Result},
};

/// A program invocation handed to the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<S: Into<String>>(program: S, args: &[&str]) -> Self {
        Self { program: program.into(), args: args.iter().map(|a| a.to_string()).collect() }
    }

    /// Splits a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self { program, args: parts.collect() })
    }

    /// Runs the command to completion in `cwd` with its output captured.
    ///
    /// # Notes
    /// - stdin is closed so a waiting child cannot block on the terminal
    /// - a non-zero exit status is returned as `CommandFailedError`, carrying stderr
    /// - no timeout is applied
    pub fn run_in<P: AsRef<Path>>(&self, cwd: P) -> Result<()> {
        log::debug!("Running `{self}` in {}", cwd.as_ref().display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd.as_ref())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::CommandSpawnError { command: self.to_string(), e })?;

        log::trace!("`{self}` stdout: {}", String::from_utf8_lossy(&output.stdout));

        if !output.status.success() {
            return Err(Error::CommandFailedError {
                command: self.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

impl Display for ExternalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// `init`, `add -A` and the initial commit, in order.
pub fn git_init_sequence(git: &str) -> Vec<ExternalCommand> {
    vec![
        ExternalCommand::new(git, &["init"]),
        ExternalCommand::new(git, &["add", "-A"]),
        ExternalCommand::new(git, &["commit", "-m", INITIAL_COMMIT_MESSAGE]),
    ]
}

/// Creates a repository with everything in `project_root` committed.
/// Stops at the first failing step.
pub fn init_repository<P: AsRef<Path>>(git: &str, project_root: P) -> Result<()> {
    for command in git_init_sequence(git) {
        command.run_in(project_root.as_ref())?;
    }
    Ok(())
}
