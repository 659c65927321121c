// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for hatch.
//!
//! This module contains pure logic with no I/O. Filesystem, process and
//! network access are handled via ports (traits) defined in the application
//! layer.
//!
//! - **No I/O**: validation rules receive facts, they never fetch them
//! - **Few external crates**: std, thiserror, and serde_json for the manifest
//! - **Immutable entities**: plans and specs are built once and only read
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    common::{Anchor, RelativePath},
    external_command::{CommandOutput, ExternalCommand},
    project_spec::{ProjectSpec, pip_executable},
    remote_asset::{Platform, RemoteAsset},
    scaffold_plan::{PlanEntry, ScaffoldPlan},
};

pub use error::{DomainError, ErrorCategory};
pub use layout::{EntryKind, LayoutEntry};
pub use validation::DomainValidator;
pub use value_objects::{InterpreterVersion, ProjectName};
