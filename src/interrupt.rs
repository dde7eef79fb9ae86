//! Ctrl-C while the project name is being asked for cancels the run: the
//! process ends with a zero exit code and prints nothing more. Anywhere else
//! it ends the process with the conventional interrupted status.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::constants::exit_codes;

static PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Installs the process-wide Ctrl-C handler.
pub fn install_handler() {
    let installed = ctrlc::set_handler(|| {
        // The terminal prompt may have hidden the cursor.
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(exit_code(prompt_active()));
    });
    if let Err(e) = installed {
        log::warn!("Could not install the Ctrl-C handler: {e}");
    }
}

/// Exit code for a Ctrl-C arriving now.
pub fn exit_code(prompt_active: bool) -> i32 {
    if prompt_active {
        exit_codes::SUCCESS
    } else {
        exit_codes::INTERRUPTED
    }
}

pub fn prompt_active() -> bool {
    PROMPT_ACTIVE.load(Ordering::SeqCst)
}

/// Marks the project name prompt as active until dropped.
pub struct PromptGuard(());

impl PromptGuard {
    pub fn activate() -> Self {
        PROMPT_ACTIVE.store(true, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for PromptGuard {
    fn drop(&mut self) {
        PROMPT_ACTIVE.store(false, Ordering::SeqCst);
    }
}
