//! Error handling for the Hatch CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - The captured output of a failed external command
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use hatch_core::{application::ApplicationError, error::HatchError};

pub use hatch_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration value could not be read or used.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `hatch-core` or an adapter.
    #[error("{0}")]
    Core(#[from] HatchError),

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check {} or the HATCH__* environment variables",
                    crate::config::AppConfig::config_path().display()
                ),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout is writable".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::External | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// A failed external command hands its own exit code through. When it
    /// has none (killed by a signal) or the code does not fit a byte, the
    /// category code is used instead.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        if let Self::Core(core) = self {
            if let Some(code) = core.command_exit_code().and_then(|c| u8::try_from(c).ok()) {
                if code != 0 {
                    return code;
                }
            }
        }
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Captured `(stdout, stderr)` of a failed external command.
    pub fn captured_output(&self) -> Option<(&str, &str)> {
        match self {
            Self::Core(HatchError::Application(ApplicationError::CommandFailed {
                stdout,
                stderr,
                ..
            })) => Some((stdout.as_str(), stderr.as_str())),
            _ => None,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        if let Some((stdout, stderr)) = self.captured_output() {
            push_captured(&mut output, stdout, stderr, |s| s.dimmed().to_string());
        }

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();

        if let Some((stdout, stderr)) = self.captured_output() {
            push_captured(&mut out, stdout, stderr, str::to_owned);
        }

        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

fn push_captured(out: &mut String, stdout: &str, stderr: &str, label: impl Fn(&str) -> String) {
    for (name, text) in [("stdout", stdout), ("stderr", stderr)] {
        let text = text.trim_end();
        if text.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n{text}\n", label(&format!("--- {name} ---"))));
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    Configuration,
    /// Internal/system error, including failed external tools.
    Internal,
}

/// Extension trait attaching a context message to I/O failures.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatch_core::domain::DomainError;
    use std::io;

    fn command_failed(exit_code: Option<i32>) -> CliError {
        CliError::Core(
            ApplicationError::CommandFailed {
                command: "venv/bin/pip install -r requirements.txt".into(),
                exit_code,
                stdout: "Collecting fastapi".into(),
                stderr: "network unreachable".into(),
            }
            .into(),
        )
    }

    #[test]
    fn failed_command_exit_code_passes_through() {
        assert_eq!(command_failed(Some(9)).exit_code(), 9);
    }

    #[test]
    fn signal_or_oversized_code_falls_back_to_one() {
        assert_eq!(command_failed(None).exit_code(), 1);
        assert_eq!(command_failed(Some(300)).exit_code(), 1);
        assert_eq!(command_failed(Some(-1)).exit_code(), 1);
    }

    #[test]
    fn validation_is_a_user_error() {
        let err = CliError::Core(
            DomainError::InvalidProjectName {
                name: "a b".into(),
                reason: "character ' ' is not allowed".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn missing_root_is_not_found() {
        let err = CliError::Core(
            DomainError::RootNotFound {
                path: "/nope".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn plain_format_prints_captured_output_first() {
        let s = command_failed(Some(1)).format_plain(false);
        let stdout_at = s.find("Collecting fastapi").unwrap();
        let stderr_at = s.find("network unreachable").unwrap();
        let error_at = s.find("Error:").unwrap();
        assert!(stdout_at < stderr_at && stderr_at < error_at);
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = command_failed(Some(1)).format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "writing summary");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
