//! Hatch Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hatch
//! web-project provisioner, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            hatch-cli (CLI)              │
//! │    (arguments, config, reporting)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ScaffoldService                │
//! │  Preflight → Environment → Scaffold →   │
//! │          Assets → Content               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ Filesystem, CommandRunner, Downloader,  │
//! │ ToolLocator, ContentStore, Reporter     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     hatch-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  ProjectSpec, layout, ScaffoldPlan,     │
//! │  InterpreterVersion, manifest merge     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hatch_core::application::{Adapters, ProvisionSettings, ScaffoldRequest, ScaffoldService};
//!
//! # fn adapters() -> Adapters { unimplemented!() }
//! let service = ScaffoldService::new(ProvisionSettings::default(), adapters());
//! let summary = service.run(&ScaffoldRequest::new("./work", "my-app")).unwrap();
//! println!("created {}", summary.project_dir().display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Adapters, ProvisionSettings, RunSummary, ScaffoldRequest, ScaffoldService,
        ports::{
            CommandRunner, ContentStore, Downloader, Filesystem, ProgressReporter, Stage,
            StepStatus, ToolLocator,
        },
    };
    pub use crate::domain::{
        Anchor, CommandOutput, ExternalCommand, InterpreterVersion, ProjectName, ProjectSpec,
        RelativePath, ScaffoldPlan,
    };
    pub use crate::error::{HatchError, HatchResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
