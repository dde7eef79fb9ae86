use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    loader::{LocalLoader, TemplateLoader},
    template::operation::TemplateOperation,
};

/// Totals of a finished copy, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
    pub skipped: usize,
    pub directories: usize,
}

/// Copies a template tree into a destination without overwriting anything.
///
/// Files already present at the destination keep their content and are
/// reported as [`TemplateOperation::Skip`]; no error is raised for them.
pub struct TemplateCopier {
    template_root: PathBuf,
    output_root: PathBuf,
}

impl TemplateCopier {
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(template_root: S, output_root: D) -> Self {
        Self { template_root: template_root.into(), output_root: output_root.into() }
    }

    /// Decides what to do with one template entry.
    pub fn plan(&self, template_entry: &Path) -> Result<TemplateOperation> {
        let relative = template_entry.strip_prefix(&self.template_root).map_err(|_| {
            Error::CopyError {
                source_path: template_entry.display().to_string(),
                target_path: self.output_root.display().to_string(),
                e: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "entry is outside the template directory",
                ),
            }
        })?;
        let target = self.output_root.join(relative);

        if template_entry.is_dir() {
            let target_exists = target.exists();
            return Ok(TemplateOperation::CreateDirectory { target, target_exists });
        }

        if target.exists() {
            Ok(TemplateOperation::Skip { source: template_entry.to_path_buf(), target })
        } else {
            Ok(TemplateOperation::Copy { source: template_entry.to_path_buf(), target })
        }
    }

    /// Copies every file and directory of the template.
    pub fn copy_all(&self) -> Result<CopySummary> {
        let template_root = LocalLoader::new(&self.template_root).load()?;
        let mut summary = CopySummary::default();

        for dir_entry in WalkDir::new(&template_root).sort_by_file_name() {
            let template_entry = dir_entry?.path().to_path_buf();
            let operation = self.plan(&template_entry)?;
            log::debug!("{}", operation.get_message());

            match &operation {
                TemplateOperation::CreateDirectory { target, target_exists } => {
                    if !target_exists {
                        std::fs::create_dir_all(target)?;
                        summary.directories += 1;
                    }
                }
                TemplateOperation::Copy { source, target } => {
                    copy_file(source, target)?;
                    summary.copied += 1;
                }
                TemplateOperation::Skip { .. } => summary.skipped += 1,
            }
        }

        log::info!(
            "Copied {} files into {} ({} skipped, {} directories created)",
            summary.copied,
            self.output_root.display(),
            summary.skipped,
            summary.directories
        );
        Ok(summary)
    }
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let copy_error = |e: std::io::Error| Error::CopyError {
        source_path: source.display().to_string(),
        target_path: target.display().to_string(),
        e,
    };

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent).map_err(copy_error)?;
    }
    std::fs::copy(source, target).map(|_| ()).map_err(copy_error)
}
