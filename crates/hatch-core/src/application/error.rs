//! Application layer errors.
//!
//! These errors represent failures in orchestration: external tools,
//! filesystem access, the package manifest. Validation errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The interpreter could not be run or did not report a version.
    #[error("Interpreter '{program}' is not usable: {reason}")]
    InterpreterUnavailable { program: String, reason: String },

    /// A process could not be started at all.
    #[error("Failed to start '{command}': {reason}")]
    CommandLaunch { command: String, reason: String },

    /// A process ran and exited unsuccessfully.
    #[error("Command '{command}' failed with {}", describe_exit(.exit_code))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The package manifest to patch does not exist.
    #[error("Package manifest not found: {}", .path.display())]
    ManifestMissing { path: PathBuf },

    /// The package manifest could not be parsed or patched.
    #[error("Package manifest {} is invalid: {reason}", .path.display())]
    ManifestInvalid { path: PathBuf, reason: String },

    /// A remote asset could not be fetched.
    #[error("Download of {url} failed: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// The content store has no payload for an owned file.
    #[error("No built-in content for {path}")]
    ContentMissing { path: String },

    /// Adapter state lock poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InterpreterUnavailable { program, .. } => vec![
                format!("Make sure '{program}' is installed and on your PATH"),
                "Or set HATCH__INTERPRETER__PROGRAM to the interpreter to use".into(),
            ],
            Self::CommandLaunch { command, .. } => vec![
                format!("Could not run: {command}"),
                "Ensure the command is installed and in your PATH".into(),
            ],
            Self::CommandFailed { .. } => vec![
                "Check the command output above for details".into(),
                "Fix the problem and re-run; completed steps are skipped or repeated safely"
                    .into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ManifestMissing { path } => vec![
                format!("Expected {} to be created by the package manager", path.display()),
                "Run the package install manually in the project folder and re-run".into(),
            ],
            Self::ManifestInvalid { path, .. } => vec![
                format!("Fix the JSON syntax in {}", path.display()),
                "Or delete it and re-run to let the package manager regenerate it".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InterpreterUnavailable { .. } => ErrorCategory::Configuration,
            Self::CommandLaunch { .. } | Self::CommandFailed { .. } => ErrorCategory::External,
            Self::DownloadFailed { .. } => ErrorCategory::External,
            Self::ManifestMissing { .. } => ErrorCategory::NotFound,
            Self::ManifestInvalid { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::ContentMissing { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_exit_is_described() {
        let err = ApplicationError::CommandFailed {
            command: "pip".into(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn exit_code_is_in_message() {
        let err = ApplicationError::CommandFailed {
            command: "pip install".into(),
            exit_code: Some(3),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "Command 'pip install' failed with exit code 3");
    }
}
