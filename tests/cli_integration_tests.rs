use assert_cmd::prelude::*;
use create_dib_app::constants::{env, PROJECT_NAME_PROMPT};
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

mod utils;
use utils::{bundled_template, entries, MISSING_GIT, MISSING_INSTALLER};

fn create_dib_app(working_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("create-dib-app"));
    cmd.current_dir(working_dir)
        .env(env::TEMPLATE_DIR, bundled_template())
        .env(env::INSTALL_COMMAND, format!("{MISSING_INSTALLER} install"))
        .env(env::GIT, MISSING_GIT);
    cmd
}

#[test]
fn prints_version() {
    let work = TempDir::new().unwrap();
    create_dib_app(work.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_describes_project_name_argument() {
    let work = TempDir::new().unwrap();
    create_dib_app(work.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"))
        .stdout(predicate::str::contains("--package-manager"));
}

#[test]
fn failed_install_still_succeeds_with_manual_instructions() {
    let work = TempDir::new().unwrap();

    create_dib_app(work.path())
        .arg("sample-proto")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("You can install dependencies manually by running:"))
        .stdout(predicate::str::contains("cd sample-proto"))
        .stdout(predicate::str::contains("npm install"))
        .stdout(predicate::str::contains("Success!"))
        .stderr(predicate::str::contains(MISSING_INSTALLER));

    let manifest = fs::read_to_string(work.path().join("sample-proto/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"sample-proto\""));
}

#[test]
fn non_empty_destination_exits_with_failure() {
    let work = TempDir::new().unwrap();
    let project = work.path().join("sample-proto");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("keep.txt"), "keep").unwrap();

    create_dib_app(work.path())
        .arg("sample-proto")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Directory sample-proto already exists and is not empty.",
        ));

    assert_eq!(entries(&project), vec!["keep.txt".to_string()]);
}

#[test]
fn missing_template_exits_with_failure() {
    let work = TempDir::new().unwrap();

    create_dib_app(work.path())
        .arg("sample-proto")
        .arg("--template-dir")
        .arg(work.path().join("gone"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to copy template files"));
}

#[test]
fn non_interactive_uses_suggested_name() {
    let work = TempDir::new().unwrap();

    create_dib_app(work.path())
        .args(["--non-interactive", "--skip-install", "--skip-git", "--package-manager", "pnpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm install"))
        .stdout(predicate::str::contains("pnpm dev"));

    assert!(work.path().join("my-prototypes/README.md").is_file());
}

fn with_stdin(working_dir: &std::path::Path, input: &str) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from_std(create_dib_app(working_dir));
    cmd.args(["--skip-install", "--skip-git"]).write_stdin(input);
    cmd
}

#[test]
fn piped_name_is_read_from_stdin() {
    let work = TempDir::new().unwrap();

    with_stdin(work.path(), "demo-app\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(PROJECT_NAME_PROMPT))
        .stdout(predicate::str::contains("cd demo-app"));

    let manifest = fs::read_to_string(work.path().join("demo-app/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"demo-app\""));
}

#[test]
fn empty_piped_line_selects_suggested_name() {
    let work = TempDir::new().unwrap();

    with_stdin(work.path(), "\n").assert().success();

    assert_eq!(entries(work.path()), vec!["my-prototypes".to_string()]);
}

#[test]
fn invalid_piped_name_exits_with_failure() {
    let work = TempDir::new().unwrap();

    with_stdin(work.path(), "Bad Name\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name 'Bad Name'"));

    assert!(entries(work.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn interrupt_at_name_prompt_exits_cleanly() {
    use std::io::Read;
    use std::process::Stdio;

    let work = TempDir::new().unwrap();
    let mut child = create_dib_app(work.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Kept open so the prompt cannot see end of input.
    let _stdin = child.stdin.take().unwrap();
    let mut stderr = child.stderr.take().unwrap();
    let mut seen = Vec::new();
    let mut chunk = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains(PROJECT_NAME_PROMPT) {
        let read = stderr.read(&mut chunk).unwrap();
        assert!(read > 0, "the name prompt was never shown");
        seen.extend_from_slice(&chunk[..read]);
    }

    let sent = Command::new("kill").args(["-INT", &child.id().to_string()]).status().unwrap();
    assert!(sent.success());
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(entries(work.path()).is_empty());
}
