//! Constants used throughout create-dib-app

/// Name printed in the banner and used in the initial commit message
pub const TOOL_NAME: &str = "create-dib-app";

/// Suggested project name for the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-prototypes";

/// Question shown by the interactive prompt
pub const PROJECT_NAME_PROMPT: &str = "What is your project named?";

/// Template directory, relative to the crate root or the executable
pub const TEMPLATE_DIR: &str = "templates/default";

/// Placeholder key replaced with the project name
pub const PROJECT_NAME_KEY: &str = "PROJECT_NAME";

/// Files (relative to the destination) that receive token substitution
pub const SUBSTITUTION_TARGETS: &[&str] = &["package.json", "README.md", "src/app/layout.tsx"];

/// Manifest file inspected after substitution
pub const MANIFEST_FILE: &str = "package.json";

/// Commit message used for the repository created in the new project
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from create-dib-app";

/// Where the template's development server listens
pub const DEV_SERVER_URL: &str = "http://localhost:3000";

/// Environment overrides
pub mod env {
    pub const TEMPLATE_DIR: &str = "CREATE_DIB_APP_TEMPLATE_DIR";
    pub const INSTALL_COMMAND: &str = "CREATE_DIB_APP_INSTALL_COMMAND";
    pub const GIT: &str = "CREATE_DIB_APP_GIT";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// Ctrl-C outside the project name prompt
    pub const INTERRUPTED: i32 = 130;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
