use std::path::Path;

use crate::domain::{
    entities::{ProjectSpec, ScaffoldPlan},
    error::DomainError,
    value_objects::{InterpreterVersion, ProjectName},
};

/// Centralized domain validation.
///
/// All preflight rules live here, not scattered across stages.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_interpreter(
        found: InterpreterVersion,
        required: InterpreterVersion,
    ) -> Result<(), DomainError> {
        if found < required {
            return Err(DomainError::InterpreterTooOld {
                found: found.to_string(),
                required: required.to_string(),
            });
        }
        Ok(())
    }

    pub fn validate_project_name(name: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(name)
    }

    /// `exists`/`is_dir` come from the caller so the rule stays free of I/O.
    pub fn validate_root(path: &Path, exists: bool, is_dir: bool) -> Result<(), DomainError> {
        if !exists {
            return Err(DomainError::RootNotFound {
                path: path.to_path_buf(),
            });
        }
        if !is_dir {
            return Err(DomainError::RootNotADirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }

    pub fn plan_for(spec: &ProjectSpec) -> Result<ScaffoldPlan, DomainError> {
        ScaffoldPlan::for_project(spec)
    }
}
