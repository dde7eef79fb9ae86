use std::fmt::Display;

/// The orchestrator's states, visited strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prompt,
    CheckEmpty,
    Mkdir,
    CopyTemplate,
    Substitute,
    InstallDeps,
    InitVcs,
    Done,
}

impl Stage {
    /// Message shown while the stage is running.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Stage::Prompt => "Resolving project name...",
            Stage::CheckEmpty => "Checking destination...",
            Stage::Mkdir => "Creating project directory...",
            Stage::CopyTemplate => "Copying template files...",
            Stage::Substitute => "Configuring project...",
            Stage::InstallDeps => "Installing dependencies (this may take a minute)...",
            Stage::InitVcs => "Initializing git repository...",
            Stage::Done => "Finishing...",
        }
    }

    /// Message shown once the stage has finished successfully.
    pub fn success_message(&self) -> &'static str {
        match self {
            Stage::Prompt => "Resolved project name",
            Stage::CheckEmpty => "Destination is available",
            Stage::Mkdir => "Created project directory",
            Stage::CopyTemplate => "Copied template files",
            Stage::Substitute => "Configured project",
            Stage::InstallDeps => "Installed dependencies",
            Stage::InitVcs => "Initialized git repository",
            Stage::Done => "Done",
        }
    }

    /// Message shown when the stage fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Stage::Prompt => "Failed to resolve project name",
            Stage::CheckEmpty => "Failed to check destination",
            Stage::Mkdir => "Failed to create project directory",
            Stage::CopyTemplate => "Failed to copy template files",
            Stage::Substitute => "Failed to configure project",
            Stage::InstallDeps => "Failed to install dependencies",
            Stage::InitVcs => "Could not initialize git repository",
            Stage::Done => "Failed to finish",
        }
    }

    /// Whether a failure in this stage aborts the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Stage::InstallDeps | Stage::InitVcs)
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::Prompt => "PROMPT",
            Stage::CheckEmpty => "CHECK_EMPTY",
            Stage::Mkdir => "MKDIR",
            Stage::CopyTemplate => "COPY_TEMPLATE",
            Stage::Substitute => "SUBSTITUTE",
            Stage::InstallDeps => "INSTALL_DEPS",
            Stage::InitVcs => "INIT_VCS",
            Stage::Done => "DONE",
        };
        write!(f, "{s}")
    }
}
