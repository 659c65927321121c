//! Stage 2: isolated Python environment.
//!
//! Creates `<root>/<environment_dir>` unless it exists, writes the fixed
//! requirements manifest, and always runs the install so a re-run keeps
//! dependencies current. Any failing command ends the run, carrying the
//! child's exit code and captured output.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, ScaffoldService,
        ports::{Stage, StepStatus},
    },
    domain::{ExternalCommand, ProjectSpec, layout, pip_executable},
    error::HatchResult,
};

impl ScaffoldService {
    #[instrument(skip_all, fields(root = %spec.root().display()))]
    pub fn provision_environment(&self, spec: &ProjectSpec) -> HatchResult<()> {
        let env_dir = spec.environment_dir(&self.settings.environment_dir);

        if self.filesystem.exists(&env_dir) {
            self.report(
                Stage::Environment,
                StepStatus::Skipped,
                format!("Virtual environment already exists at {}", env_dir.display()),
            );
        } else {
            self.report(
                Stage::Environment,
                StepStatus::Started,
                "Creating virtual environment...",
            );
            let create = ExternalCommand::new(&self.settings.interpreter)
                .args(["-m", "venv"])
                .arg(&env_dir)
                .current_dir(spec.root());
            self.run_checked(Stage::Environment, &create)?;
            self.report(
                Stage::Environment,
                StepStatus::Done,
                format!("Virtual environment created at {}", env_dir.display()),
            );
        }

        let requirements = spec.root().join(layout::REQUIREMENTS_FILE);
        let mut manifest = self.settings.requirements.join("\n");
        manifest.push('\n');
        self.filesystem.write_file(&requirements, &manifest)?;
        self.report(
            Stage::Environment,
            StepStatus::Done,
            format!("{} created", layout::REQUIREMENTS_FILE),
        );

        self.report(
            Stage::Environment,
            StepStatus::Started,
            "Installing dependencies...",
        );
        let install = ExternalCommand::new(pip_executable(&env_dir))
            .args(["install", "-r"])
            .arg(&requirements)
            .current_dir(spec.root());
        self.run_checked(Stage::Environment, &install)?;
        self.report(Stage::Environment, StepStatus::Done, "Dependencies installed");

        info!(packages = self.settings.requirements.len(), "Environment ready");
        Ok(())
    }

    /// Run a command whose failure is fatal.
    fn run_checked(&self, stage: Stage, command: &ExternalCommand) -> HatchResult<()> {
        let output = match self.runner.run(command) {
            Ok(output) => output,
            Err(e) => {
                self.report(stage, StepStatus::Failed, format!("Error running: {command}"));
                return Err(e);
            }
        };

        if output.success() {
            return Ok(());
        }

        warn!(%command, exit_code = ?output.exit_code, "Command failed");
        self.report(stage, StepStatus::Failed, format!("Error running: {command}"));
        Err(ApplicationError::CommandFailed {
            command: command.to_string(),
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        }
        .into())
    }
}
