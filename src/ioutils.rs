use std::path::Path;

use crate::error::{Error, Result};

/// A missing path counts as empty; so does a directory without entries.
/// Anything else at the path (a file, or a directory with entries) is not empty.
pub fn is_directory_empty<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(true);
    }
    if !path.is_dir() {
        return Ok(false);
    }
    Ok(std::fs::read_dir(path)?.next().is_none())
}

/// Ensures the output directory can receive a fresh project.
pub fn ensure_output_dir_is_empty<P: AsRef<Path>>(name: &str, output_dir: P) -> Result<()> {
    if is_directory_empty(output_dir)? {
        Ok(())
    } else {
        Err(Error::DirectoryNotEmptyError { name: name.to_string() })
    }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
