//! Stage 1: preflight validation.
//!
//! Checks, in order: interpreter version, root folder, project name. Nothing
//! is written; the first failing check ends the run.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError, ScaffoldRequest, ScaffoldService,
        ports::{Stage, StepStatus},
    },
    domain::{
        DomainValidator as validator, ExternalCommand, InterpreterVersion, ProjectSpec,
    },
    error::HatchResult,
};

impl ScaffoldService {
    /// Validate user input and the host, producing the immutable [`ProjectSpec`].
    #[instrument(skip_all, fields(root = %request.root.display(), name = %request.name))]
    pub fn preflight(&self, request: &ScaffoldRequest) -> HatchResult<ProjectSpec> {
        let version = self.check_interpreter()?;
        self.report(
            Stage::Preflight,
            StepStatus::Done,
            format!(
                "Python {version} found (>= {} required)",
                self.settings.minimum_interpreter
            ),
        );

        let fs = &self.filesystem;
        validator::validate_root(
            &request.root,
            fs.exists(&request.root),
            fs.is_dir(&request.root),
        )?;
        let root = fs.canonicalize(&request.root)?;
        debug!(root = %root.display(), "Root folder resolved");

        let name = validator::validate_project_name(&request.name)?;

        self.report(
            Stage::Preflight,
            StepStatus::Done,
            format!("Project '{name}' will be created in {}", root.display()),
        );

        Ok(ProjectSpec::new(root, name))
    }

    fn check_interpreter(&self) -> HatchResult<InterpreterVersion> {
        let program = &self.settings.interpreter;
        let command = ExternalCommand::new(program).arg("--version");

        let output = self.runner.run(&command).map_err(|e| {
            ApplicationError::InterpreterUnavailable {
                program: program.clone(),
                reason: e.to_string(),
            }
        })?;

        if !output.success() {
            return Err(ApplicationError::InterpreterUnavailable {
                program: program.clone(),
                reason: format!("'{command}' exited with {:?}", output.exit_code),
            }
            .into());
        }

        // Older interpreters print the banner on stderr.
        let version = InterpreterVersion::from_banner(&output.combined())?;
        debug!(%version, "Interpreter version detected");

        validator::validate_interpreter(version, self.settings.minimum_interpreter)?;
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        application::{
            ApplicationError, ScaffoldRequest,
            testing::{Harness, version_ok},
        },
        domain::{CommandOutput, DomainError},
        error::HatchError,
    };

    #[test]
    fn valid_input_yields_spec() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|_| Ok(version_ok("Python 3.11.4")));

        let spec = h
            .service()
            .preflight(&ScaffoldRequest::new("/work", "demo"))
            .unwrap();

        assert_eq!(spec.project_dir(), std::path::PathBuf::from("/work/demo"));
    }

    #[test]
    fn banner_on_stderr_is_accepted() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|_| {
            Ok(CommandOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: "Python 3.9.2\n".into(),
            })
        });

        assert!(
            h.service()
                .preflight(&ScaffoldRequest::new("/work", "demo"))
                .is_ok()
        );
    }

    #[test]
    fn old_interpreter_fails_first() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|_| Ok(version_ok("Python 3.6.15")));

        // Both the root and the name are bad too; the version check wins.
        let err = h
            .service()
            .preflight(&ScaffoldRequest::new("/missing", "bad name"))
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::InterpreterTooOld { .. })
        ));
    }

    #[test]
    fn missing_interpreter_is_fatal() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|cmd| {
            Err(ApplicationError::CommandLaunch {
                command: cmd.to_string(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let err = h
            .service()
            .preflight(&ScaffoldRequest::new("/work", "demo"))
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::InterpreterUnavailable { .. })
        ));
    }

    #[test]
    fn missing_root_is_checked_before_name() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|_| Ok(version_ok("Python 3.12.0")));

        let err = h
            .service()
            .preflight(&ScaffoldRequest::new("/missing", "bad name"))
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::RootNotFound { .. })
        ));
    }

    #[test]
    fn root_that_is_a_file_is_rejected() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|_| Ok(version_ok("Python 3.12.0")));
        h.fs.put_file("/work/notes.txt", "hi");

        let err = h
            .service()
            .preflight(&ScaffoldRequest::new("/work/notes.txt", "demo"))
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::RootNotADirectory { .. })
        ));
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["my app", "../escape", "a/b", "", "semi;colon"] {
            let mut h = Harness::new();
            h.runner.expect_run().returning(|_| Ok(version_ok("Python 3.12.0")));

            let err = h
                .service()
                .preflight(&ScaffoldRequest::new("/work", name))
                .unwrap_err();

            assert!(
                matches!(
                    err,
                    HatchError::Domain(DomainError::InvalidProjectName { .. })
                ),
                "accepted {name:?}"
            );
        }
    }
}
