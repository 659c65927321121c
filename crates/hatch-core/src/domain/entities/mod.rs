pub mod common;
pub mod external_command;
pub mod project_spec;
pub mod remote_asset;
pub mod scaffold_plan;

pub use crate::domain::DomainError;
pub use external_command::{CommandOutput, ExternalCommand};
pub use project_spec::ProjectSpec;
pub use remote_asset::{Platform, RemoteAsset};
pub use scaffold_plan::{PlanEntry, ScaffoldPlan};
