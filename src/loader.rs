use crate::error::{Error, Result};
use std::path::PathBuf;

/// Trait for locating the template that gets copied into new projects.
pub trait TemplateLoader {
    /// Returns the template root, failing when it cannot be found.
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for the template bundled on the local filesystem.
pub struct LocalLoader<P: AsRef<std::path::Path>> {
    path: P,
}

impl<P: AsRef<std::path::Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<std::path::Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
        log::debug!("Using template at {}", path.display());
        Ok(path.to_path_buf())
    }
}
