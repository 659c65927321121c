//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `hatch-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: Blocking subprocess execution
//!   - `ToolLocator`: `PATH` lookup
//!   - `Downloader`: Remote payloads
//!   - `ContentStore`: Fixed file payloads
//!   - `ProgressReporter`: Status lines for the user
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`ScaffoldService::run` and the per-stage methods)

pub mod output;

pub use output::{
    CommandRunner, ContentStore, Downloader, Filesystem, ProgressReporter, Stage, StepStatus,
    ToolLocator,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockDownloader, MockToolLocator};
