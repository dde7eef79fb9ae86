//! Dialoguer-based implementation of the prompt interface

use std::io::IsTerminal;

use super::interface::{PromptOutcome, TextPromptConfig, TextPrompter, Validator};
use super::line_impl::LinePrompter;
use crate::{error::Result, interrupt::PromptGuard};
use dialoguer::Input;

/// Terminal prompter; re-asks until the validator accepts the input.
///
/// When standard input is not a terminal a single line is read instead.
/// Ctrl-C is handled by [`crate::interrupt`] while the prompt is shown.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validate: Validator<'_>,
    ) -> Result<PromptOutcome> {
        let _guard = PromptGuard::activate();

        if !std::io::stdin().is_terminal() {
            log::debug!("Standard input is not a terminal, reading a single line");
            return LinePrompter::new(std::io::stdin().lock()).prompt_text(config, validate);
        }

        let mut input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .validate_with(|answer: &String| validate(answer.as_str()));
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        match input.interact_text() {
            Ok(answer) => Ok(PromptOutcome::Answered(answer)),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
                Ok(PromptOutcome::Cancelled)
            }
            Err(e) => Err(e.into()),
        }
    }
}
