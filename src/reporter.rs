//! Console output for a scaffolding run.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::{
    config::PackageManager,
    constants::{DEV_SERVER_URL, TOOL_NAME},
    prompt::ProjectRequest,
};

/// A running stage shown as a spinner; finishing it prints a status line.
pub struct Step {
    spinner: ProgressBar,
}

impl Step {
    pub fn start(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner()
            .with_style(ProgressStyle::default_spinner())
            .with_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }

    pub fn succeed(self, message: &str) {
        self.finish(style("✔").green().to_string(), message);
    }

    pub fn fail(self, message: &str) {
        self.finish(style("✖").red().to_string(), message);
    }

    pub fn warn(self, message: &str) {
        self.finish(style("⚠").yellow().to_string(), message);
    }

    fn finish(self, symbol: String, message: &str) {
        self.spinner.finish_and_clear();
        println!("{symbol} {message}");
    }
}

pub fn print_banner() {
    println!("\n{}\n", style(TOOL_NAME).cyan().bold());
}

/// Printed when dependencies were not installed by the tool.
pub fn print_manual_install(project: &ProjectRequest, package_manager: PackageManager) {
    println!("\n{}", style("You can install dependencies manually by running:").yellow());
    println!("  {}", style(format!("cd {}", project.name)).cyan());
    println!("  {}\n", style(format!("{package_manager} install")).cyan());
}

pub fn print_summary(
    project: &ProjectRequest,
    package_manager: PackageManager,
    dev_script: Option<&str>,
) {
    println!("\n{}\n", style("Success!").green().bold());
    println!(
        "Created {} at {}\n",
        style(&project.name).cyan(),
        style(project.destination.display()).dim()
    );
    println!("Next steps:\n");
    println!("  {} {}", style("cd").cyan(), project.name);
    if let Some(script) = dev_script {
        println!("  {}", style(package_manager.run_script(script)).cyan());
    }
    println!("\nYour prototype workspace will be available at:");
    println!("  {}\n", style(DEV_SERVER_URL).blue());
}
