use create_dib_app::{config::Settings, external::ExternalCommand};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Programs that do not exist, so install and git steps fail.
pub const MISSING_INSTALLER: &str = "create-dib-app-missing-installer";
pub const MISSING_GIT: &str = "create-dib-app-missing-git";

/// The template shipped with the crate.
pub fn bundled_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/default")
}

/// Settings whose external tools always fail.
pub fn offline_settings(working_dir: &Path, template_dir: &Path) -> Settings {
    Settings::new(working_dir, template_dir)
        .with_install_command(ExternalCommand::new(MISSING_INSTALLER, &["install"]))
        .with_git_program(MISSING_GIT)
}

/// Writes a minimal template with the three substituted files and an extra one.
pub fn write_small_template(root: &Path) {
    fs::create_dir_all(root.join("src/app")).unwrap();
    fs::write(root.join("package.json"), "{\n  \"name\": \"{{PROJECT_NAME}}\"\n}\n").unwrap();
    fs::write(root.join("README.md"), "# {{PROJECT_NAME}}\n").unwrap();
    fs::write(root.join("src/app/layout.tsx"), "export const title = '{{PROJECT_NAME}}';\n")
        .unwrap();
    fs::write(root.join("src/app/page.tsx"), "// {{PROJECT_NAME}} stays here\n").unwrap();
}

/// Relative paths of all files below `root`.
pub fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Names of the direct children of `dir`.
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
