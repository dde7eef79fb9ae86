use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::{
    constants::PROJECT_NAME_KEY,
    error::Result,
    ioutils::{read_to_string, write_file},
};

/// Placeholder keys and the text that replaces `{{KEY}}`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SubstitutionMap(IndexMap<String, String>);

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The map every new project gets: the project name.
    pub fn for_project(project_name: &str) -> Self {
        Self::new().with(PROJECT_NAME_KEY, project_name)
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Replaces every `{{KEY}}` occurrence for each key. Unknown placeholders stay.
    pub fn apply(&self, content: &str) -> String {
        self.iter().fold(content.to_string(), |acc, (key, value)| {
            acc.replace(&placeholder(key), value)
        })
    }
}

fn placeholder(key: &str) -> String {
    format!("{{{{{key}}}}}")
}

/// Rewrites one file in place.
pub fn replace_in_file<P: AsRef<Path>>(path: P, replacements: &SubstitutionMap) -> Result<()> {
    let path = path.as_ref();
    let content = read_to_string(path)?;
    write_file(&replacements.apply(&content), path)
}

/// Applies substitution to the allow-listed files under `output_root`.
///
/// Listed files that are missing are skipped. Returns the files rewritten.
pub fn substitute_targets<P: AsRef<Path>>(
    output_root: P,
    replacements: &SubstitutionMap,
    targets: &[&str],
) -> Result<Vec<PathBuf>> {
    let output_root = output_root.as_ref();
    let mut rewritten = Vec::new();

    for target in targets {
        let path = output_root.join(target);
        if !path.is_file() {
            log::debug!("Skipping substitution in '{}' (not found)", path.display());
            continue;
        }
        replace_in_file(&path, replacements)?;
        log::debug!("Substituted placeholders in '{}'", path.display());
        rewritten.push(path);
    }

    Ok(rewritten)
}
