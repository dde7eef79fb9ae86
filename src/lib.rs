/// Handles argument parsing and the scaffolding workflow.
pub mod cli;

/// Run configuration from flags and environment.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Child processes for dependency installation and git.
pub mod external;

/// Ctrl-C handling.
pub mod interrupt;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Locates the bundled template.
pub mod loader;

/// Reads the generated package manifest.
pub mod manifest;

/// Project name resolution and user interaction.
pub mod prompt;

/// Terminal status lines and the final summary.
pub mod reporter;

/// Orchestrator states.
pub mod stage;

/// Template copying and placeholder substitution.
pub mod template;

/// Project name validation.
pub mod validation;
