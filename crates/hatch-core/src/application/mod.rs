//! Application layer for Hatch.
//!
//! This layer contains:
//! - **Services**: The five-stage orchestration (`ScaffoldService`)
//! - **Stages**: One module per stage, each an `impl ScaffoldService` block
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules (names, versions, the layout, the manifest merge) live in
//! `crate::domain`; this layer sequences them against the outside world.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;
pub mod stages;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{Adapters, RunSummary, ScaffoldRequest, ScaffoldService};
pub use stages::{AssetReport, ContentReport, ScaffoldReport};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandRunner, ContentStore, Downloader, Filesystem, ProgressReporter, Stage, StepStatus,
    ToolLocator,
};

pub use error::ApplicationError;
pub use settings::{DEFAULT_DEV_SCRIPT, ProvisionSettings};
