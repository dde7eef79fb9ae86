//! Pure interfaces for prompting without external dependencies
//!
//! The orchestrator only sees these types; terminal and scripted
//! implementations live next to this module.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
}

/// What came back from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Answered(String),
    /// The user interrupted the prompt.
    Cancelled,
}

/// Synchronous validator: `Err` carries the message shown before re-prompting.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig, validate: Validator<'_>)
        -> Result<PromptOutcome>;
}
