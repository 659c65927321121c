//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` runs the five provisioning stages in order. The stages
//! themselves live in `crate::application::stages` as `impl ScaffoldService`
//! blocks so each one can be called and tested on its own.

pub mod scaffold_service;

pub use scaffold_service::{Adapters, RunSummary, ScaffoldRequest, ScaffoldService};
