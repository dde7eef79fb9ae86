//! Project name resolution.
//!
//! The name comes from the command line when given, otherwise from a
//! [`TextPrompter`]. Terminal interaction is isolated behind that trait so the
//! orchestrator can run with [`AutomaticPrompter`] in tests and in
//! non-interactive mode.

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;
pub mod line_impl;

pub use self::automatic_impl::AutomaticPrompter;
pub use self::dialoguer::DialoguerPrompter;
pub use self::interface::{PromptOutcome, TextPromptConfig, TextPrompter};
pub use self::line_impl::LinePrompter;

use std::path::{Path, PathBuf};

use crate::{
    constants::{DEFAULT_PROJECT_NAME, PROJECT_NAME_PROMPT},
    error::Result,
    validation::validate_project_name,
};

/// Name and destination of the project being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub destination: PathBuf,
}

impl ProjectRequest {
    pub fn new<P: AsRef<Path>>(name: &str, working_dir: P) -> Self {
        Self { name: name.to_string(), destination: working_dir.as_ref().join(name) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectPrompt {
    Resolved(ProjectRequest),
    Cancelled,
    /// No name was supplied or typed.
    Unresolved,
}

/// Resolves the project to create.
///
/// A non-empty `initial_name` is used verbatim; it is deliberately not
/// validated, matching how names passed on the command line have always
/// been accepted.
pub fn prompt_for_project<P: AsRef<Path>>(
    initial_name: Option<&str>,
    working_dir: P,
    prompter: &dyn TextPrompter,
) -> Result<ProjectPrompt> {
    let name = match initial_name.filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => {
            let config = TextPromptConfig {
                prompt: PROJECT_NAME_PROMPT.to_string(),
                default: Some(DEFAULT_PROJECT_NAME.to_string()),
            };
            match prompter.prompt_text(&config, &validate_project_name)? {
                PromptOutcome::Answered(answer) => answer,
                PromptOutcome::Cancelled => return Ok(ProjectPrompt::Cancelled),
            }
        }
    };

    if name.is_empty() {
        return Ok(ProjectPrompt::Unresolved);
    }
    Ok(ProjectPrompt::Resolved(ProjectRequest::new(&name, working_dir)))
}
