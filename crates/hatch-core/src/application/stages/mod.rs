//! The five provisioning stages, one file each.
//!
//! Every stage is an `impl ScaffoldService` block: it receives explicit paths
//! (a [`ProjectSpec`](crate::domain::ProjectSpec) or a
//! [`ScaffoldPlan`](crate::domain::ScaffoldPlan)), reports one status line
//! per step, and decides for itself which failures are fatal.

mod assets;
mod content;
mod environment;
mod preflight;
mod scaffolder;

pub use assets::AssetReport;
pub use content::ContentReport;
pub use scaffolder::ScaffoldReport;
