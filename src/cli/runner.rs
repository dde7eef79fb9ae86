use crate::{
    cli::Args,
    config::Settings,
    constants::{SUBSTITUTION_TARGETS, TOOL_NAME},
    error::{Error, Result},
    external::init_repository,
    ioutils::{create_dir_all, ensure_output_dir_is_empty},
    manifest::PackageManifest,
    prompt::{
        prompt_for_project, AutomaticPrompter, DialoguerPrompter, ProjectPrompt,
        ProjectRequest, TextPrompter,
    },
    reporter::{self, Step},
    stage::Stage,
    template::{substitute_targets, SubstitutionMap, TemplateCopier},
};
use console::style;

const DEV_SCRIPT: &str = "dev";

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Created(ProjectRequest),
    /// The user cancelled the prompt; nothing was written.
    Cancelled,
}

/// Orchestrates project creation, one stage after another.
///
/// Stages up to and including substitution abort the run on failure and
/// leave whatever was already written in place. Dependency installation and
/// repository initialization only warn.
pub struct Runner {
    settings: Settings,
    project_name: Option<String>,
    prompter: Box<dyn TextPrompter>,
}

impl Runner {
    pub fn new(
        settings: Settings,
        project_name: Option<String>,
        prompter: Box<dyn TextPrompter>,
    ) -> Self {
        Self { settings, project_name, prompter }
    }

    /// Executes the complete scaffolding workflow
    pub fn run(self) -> Result<RunOutcome> {
        reporter::print_banner();

        log::debug!("Entering stage {}", Stage::Prompt);
        let project = match prompt_for_project(
            self.project_name.as_deref(),
            &self.settings.working_dir,
            self.prompter.as_ref(),
        )
        .map_err(|e| e.in_stage(Stage::Prompt))?
        {
            ProjectPrompt::Resolved(project) => project,
            ProjectPrompt::Cancelled => {
                log::debug!("Project name prompt cancelled");
                return Ok(RunOutcome::Cancelled);
            }
            ProjectPrompt::Unresolved => return Err(Error::ProjectNameMissing),
        };

        log::debug!("Entering stage {}", Stage::CheckEmpty);
        ensure_output_dir_is_empty(&project.name, &project.destination)?;

        run_stage(Stage::Mkdir, || create_dir_all(&project.destination))?;

        run_stage(Stage::CopyTemplate, || {
            TemplateCopier::new(&self.settings.template_dir, &project.destination).copy_all()
        })?;

        run_stage(Stage::Substitute, || {
            substitute_targets(
                &project.destination,
                &SubstitutionMap::for_project(&project.name),
                SUBSTITUTION_TARGETS,
            )
        })?;
        let manifest = PackageManifest::load(&project.destination);
        if let Some(manifest) = &manifest {
            if !manifest.name_matches(&project.name) {
                log::warn!(
                    "package.json names the project {:?} instead of '{}'",
                    manifest.name,
                    project.name
                );
            }
        }

        self.install_dependencies(&project);
        self.initialize_repository(&project);

        log::debug!("Entering stage {}", Stage::Done);
        let dev_script =
            manifest.filter(|manifest| manifest.has_script(DEV_SCRIPT)).map(|_| DEV_SCRIPT);
        reporter::print_summary(&project, self.settings.package_manager, dev_script);

        Ok(RunOutcome::Created(project))
    }

    /// Runs the package manager; failure prints recovery instructions and continues.
    fn install_dependencies(&self, project: &ProjectRequest) {
        let stage = Stage::InstallDeps;
        if self.settings.skip_install {
            log::info!("Skipping stage {stage}");
            reporter::print_manual_install(project, self.settings.package_manager);
            return;
        }

        let installed =
            run_stage(stage, || self.settings.install_command.run_in(&project.destination));
        if let Err(e) = installed {
            eprintln!("{}", style(&e).red());
            reporter::print_manual_install(project, self.settings.package_manager);
        }
    }

    /// Creates the initial commit; failure only warns.
    fn initialize_repository(&self, project: &ProjectRequest) {
        let stage = Stage::InitVcs;
        if self.settings.skip_git {
            log::info!("Skipping stage {stage}");
            return;
        }

        if let Err(e) =
            run_stage(stage, || init_repository(&self.settings.git_program, &project.destination))
        {
            log::warn!("{e}");
        }
    }
}

/// Runs one stage behind a status line.
///
/// A failure comes back tagged with its stage. Fatal stages show it as an
/// error, the others as a warning; the caller decides whether to go on.
fn run_stage<T>(stage: Stage, action: impl FnOnce() -> Result<T>) -> Result<T> {
    log::debug!("Entering stage {stage}");
    let step = Step::start(stage.progress_message());
    match action() {
        Ok(value) => {
            step.succeed(stage.success_message());
            Ok(value)
        }
        Err(e) => {
            if stage.is_fatal() {
                step.fail(stage.failure_message());
            } else {
                step.warn(stage.failure_message());
            }
            Err(e.in_stage(stage))
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<RunOutcome> {
    let settings = Settings::from_args(&args)?;
    let prompter: Box<dyn TextPrompter> = if settings.non_interactive {
        Box::new(AutomaticPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };
    log::debug!("Starting {TOOL_NAME}");
    Runner::new(settings, args.project_name, prompter).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_failures_carry_their_stage() {
        for stage in [Stage::CopyTemplate, Stage::InstallDeps, Stage::InitVcs] {
            let err = run_stage(stage, || -> Result<()> { Err(Error::ProjectNameMissing) })
                .unwrap_err();
            match err {
                Error::StageFailed { stage: failed, source } => {
                    assert_eq!(failed, stage);
                    assert!(matches!(*source, Error::ProjectNameMissing));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn stage_success_passes_value_through() {
        assert_eq!(run_stage(Stage::Substitute, || Ok(3)).unwrap(), 3);
    }
}
