use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::{constants::MANIFEST_FILE, ioutils::read_to_string};

/// The parts of a generated `package.json` the summary cares about.
#[derive(Debug, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scripts: IndexMap<String, String>,
}

impl PackageManifest {
    /// Reads the manifest of a generated project.
    ///
    /// A missing or unparsable manifest is logged and yields `None`; the
    /// run does not fail because of it.
    pub fn load<P: AsRef<Path>>(project_root: P) -> Option<Self> {
        let path = project_root.as_ref().join(MANIFEST_FILE);
        if !path.is_file() {
            log::debug!("No manifest at '{}'", path.display());
            return None;
        }
        let content = match read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not read '{}': {e}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                log::warn!("'{}' is not valid JSON after configuration: {e}", path.display());
                None
            }
        }
    }

    pub fn has_script(&self, script: &str) -> bool {
        self.scripts.contains_key(script)
    }

    /// False only when the manifest names a different package.
    pub fn name_matches(&self, project_name: &str) -> bool {
        self.name.as_deref().map_or(true, |name| name == project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_name_and_scripts() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"name": "demo-app", "scripts": {"dev": "next dev", "build": "next build"}}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(tmp.path()).unwrap();

        assert_eq!(manifest.name.as_deref(), Some("demo-app"));
        assert!(manifest.has_script("dev"));
        assert!(!manifest.has_script("test"));
        assert!(manifest.name_matches("demo-app"));
        assert!(!manifest.name_matches("other-app"));
    }

    #[test]
    fn unnamed_manifest_matches_any_project() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"private": true}"#).unwrap();
        let manifest = PackageManifest::load(tmp.path()).unwrap();
        assert!(manifest.name_matches("demo-app"));
        assert!(!manifest.has_script("dev"));
    }

    #[test]
    fn broken_manifest_yields_none() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), r#"{"name": "a"b"}"#).unwrap();
        assert!(PackageManifest::load(tmp.path()).is_none());
    }

    #[test]
    fn missing_manifest_yields_none() {
        let tmp = TempDir::new().unwrap();
        assert!(PackageManifest::load(tmp.path()).is_none());
    }
}
