//! Prompt provider reading a single line, for input that is not a terminal.

use std::cell::RefCell;
use std::io::BufRead;

use super::interface::{PromptOutcome, TextPromptConfig, TextPrompter, Validator};
use crate::error::{Error, Result};

/// Reads one answer per prompt from a line-oriented source such as a pipe.
///
/// An empty line, or the end of input, selects the default suggestion. There
/// is nobody to re-ask, so a rejected answer is an error.
pub struct LinePrompter<R> {
    input: RefCell<R>,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input: RefCell::new(input) }
    }
}

impl<R: BufRead> TextPrompter for LinePrompter<R> {
    fn prompt_text(
        &self,
        config: &TextPromptConfig,
        validate: Validator<'_>,
    ) -> Result<PromptOutcome> {
        match &config.default {
            Some(default) => eprint!("{} [{default}]: ", config.prompt),
            None => eprint!("{}: ", config.prompt),
        }

        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        // The piped answer is not echoed.
        eprintln!();

        let typed = line.trim_end_matches(['\n', '\r']);
        let answer = if typed.is_empty() {
            config.default.clone().unwrap_or_default()
        } else {
            typed.to_string()
        };
        if read == 0 {
            log::debug!("No input left, answering '{}' with '{answer}'", config.prompt);
        }

        validate(&answer)
            .map_err(|reason| Error::InvalidProjectName { name: answer.clone(), reason })?;
        Ok(PromptOutcome::Answered(answer))
    }
}
