// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `HatchError`)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Cannot parse interpreter version from '{0}'")]
    InvalidVersion(String),

    #[error("Interpreter {found} is too old: {required} or newer is required")]
    InterpreterTooOld { found: String, required: String },

    #[error("Root path is not a directory: {}", .path.display())]
    RootNotADirectory { path: PathBuf },

    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the root folder: {path}")]
    PathOutsideRoot { path: String },

    #[error("Manifest is not valid: {0}")]
    InvalidManifest(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Root path does not exist: {}", .path.display())]
    RootNotFound { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use only ASCII letters, digits, hyphens, and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::InvalidVersion(_) => vec![
                "Check that the configured interpreter is a Python executable".into(),
                "Override it with HATCH__INTERPRETER__PROGRAM".into(),
            ],
            Self::InterpreterTooOld { required, .. } => vec![
                format!("Install Python {required} or newer"),
                "Or point HATCH__INTERPRETER__PROGRAM at a newer interpreter".into(),
            ],
            Self::RootNotFound { path } => vec![
                format!("Create the folder first: mkdir -p {}", path.display()),
                "Or pass an existing folder as the first argument".into(),
            ],
            Self::RootNotADirectory { path } => vec![
                format!("'{}' is a file, not a folder", path.display()),
            ],
            Self::InvalidManifest(_) => vec![
                "Check package.json for syntax errors".into(),
                "Delete it and re-run to let npm regenerate it".into(),
            ],
            _ => vec!["This is a bug in the built-in layout, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidVersion(_)
            | Self::InterpreterTooOld { .. }
            | Self::RootNotADirectory { .. }
            | Self::InvalidManifest(_) => ErrorCategory::Validation,
            Self::RootNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathOutsideRoot { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
