//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hatch-adapters` crate provides implementations; the CLI provides the
//! [`ProgressReporter`].

use std::path::{Path, PathBuf};

use crate::domain::{Anchor, CommandOutput, ExternalCommand, RelativePath};
use crate::error::HatchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hatch_adapters::filesystem::LocalFilesystem` (production)
/// - `hatch_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths are absolute; stages never depend on the working directory.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> HatchResult<()>;

    /// Create an empty file if nothing exists at `path`.
    ///
    /// Returns `true` when the file was created. An existing file is left
    /// byte-for-byte and timestamp-for-timestamp untouched.
    fn touch(&self, path: &Path) -> HatchResult<bool>;

    /// Write UTF-8 text, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()>;

    /// Write raw bytes, replacing any existing file.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> HatchResult<()>;

    fn read_to_string(&self, path: &Path) -> HatchResult<String>;

    /// Copy a file, returning the number of bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> HatchResult<u64>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> HatchResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Absolute, normalised form of an existing path.
    fn canonicalize(&self, path: &Path) -> HatchResult<PathBuf>;
}

/// Port for running external programs to completion.
///
/// `Err` means the process could not be started; a process that ran and
/// failed is an `Ok` whose [`CommandOutput::success`] is `false`. The caller
/// decides whether that is fatal.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &ExternalCommand) -> HatchResult<CommandOutput>;
}

/// Port for finding executables on the search path.
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Port for fetching remote byte payloads.
#[cfg_attr(test, mockall::automock)]
pub trait Downloader: Send + Sync {
    fn fetch(&self, url: &str) -> HatchResult<Vec<u8>>;
}

/// Port for the fixed payloads of owned content files.
///
/// Implemented by:
/// - `hatch_adapters::content::EmbeddedContentStore` (compiled-in resources)
pub trait ContentStore: Send + Sync {
    /// Payload for a layout path, or `None` if the store has none.
    fn content(&self, anchor: Anchor, path: &RelativePath) -> Option<&str>;
}

/// Which of the five stages an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Preflight,
    Environment,
    Scaffold,
    Assets,
    Content,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::Environment => "environment",
            Self::Scaffold => "scaffold",
            Self::Assets => "assets",
            Self::Content => "content",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome marker of one status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// A long-running step began.
    Started,
    Done,
    /// Already satisfied; nothing to do.
    Skipped,
    /// Non-fatal problem; the run continues.
    Warning,
    /// The step failed. Fatal only if the stage says so.
    Failed,
}

/// Port for the human-readable audit trail: one line per completed step.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, stage: Stage, status: StepStatus, message: &str);
}
