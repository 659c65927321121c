//! Subprocess and `PATH` adapters.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, instrument};

use hatch_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, ToolLocator},
    },
    domain::{CommandOutput, ExternalCommand},
    error::HatchResult,
};

/// Runs commands to completion with `std::process`, capturing both streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &ExternalCommand) -> HatchResult<CommandOutput> {
        let mut process = Command::new(command.program());
        process.args(command.arguments());
        if let Some(dir) = command.working_dir() {
            process.current_dir(dir);
        }

        let output = process
            .output()
            .map_err(|e| ApplicationError::CommandLaunch {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(status = %output.status, "Command finished");

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Finds executables with the `which` crate, honouring `PATHEXT` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLocator;

impl PathLocator {
    pub fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        let found = which::which(tool).ok();
        debug!(tool, found = ?found, "Tool lookup");
        found
    }
}
