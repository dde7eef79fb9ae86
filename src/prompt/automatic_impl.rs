//! Prompt provider that answers without user interaction.
//!
//! Used by `--non-interactive` and in tests.

use super::interface::{PromptOutcome, TextPromptConfig, TextPrompter, Validator};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Response {
    /// Accept the prompt's default suggestion.
    Default,
    Answer(String),
    Cancel,
}

/// Automatic prompt provider that gives a predefined response.
///
/// It cannot re-ask, so an answer rejected by the validator is an error.
#[derive(Debug, Clone)]
pub struct AutomaticPrompter {
    response: Response,
}

impl AutomaticPrompter {
    /// Answers every prompt with its default suggestion.
    pub fn new() -> Self {
        Self { response: Response::Default }
    }

    pub fn with_answer(answer: &str) -> Self {
        Self { response: Response::Answer(answer.to_string()) }
    }

    /// Behaves like a user pressing Ctrl-C.
    pub fn cancelled() -> Self {
        Self { response: Response::Cancel }
    }
}

impl Default for AutomaticPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validate: Validator<'_>,
    ) -> Result<PromptOutcome> {
        let answer = match &self.response {
            Response::Cancel => return Ok(PromptOutcome::Cancelled),
            Response::Answer(answer) => answer.clone(),
            Response::Default => config.default.clone().unwrap_or_default(),
        };

        validate(&answer)
            .map_err(|reason| Error::InvalidProjectName { name: answer.clone(), reason })?;

        log::info!("Auto-answering '{}' with: '{}'", config.prompt, answer);
        Ok(PromptOutcome::Answered(answer))
    }
}
