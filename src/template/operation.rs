use std::path::PathBuf;

/// What the copier does with a single template entry.
#[derive(Debug, PartialEq)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf },
    CreateDirectory { target: PathBuf, target_exists: bool },
    /// The target file already exists and is kept as-is.
    Skip { source: PathBuf, target: PathBuf },
}

impl TemplateOperation {
    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::Copy { source, target } => {
                format!("Copying '{}' to '{}'", source.display(), target.display())
            }
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("Skipping directory creation '{}' (already exists)", target.display())
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
            TemplateOperation::Skip { source, target } => {
                format!(
                    "Skipping copy of '{}' to '{}' (target already exists)",
                    source.display(),
                    target.display()
                )
            }
        }
    }
}
