//! Stage 3: directory tree and placeholder files.

use tracing::{debug, instrument};

use crate::{
    application::{
        ScaffoldService,
        ports::{Stage, StepStatus},
    },
    domain::ScaffoldPlan,
    error::HatchResult,
};

/// Counts from one scaffolding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories_created: usize,
    pub files_created: usize,
    /// Placeholders that were already present and left untouched.
    pub files_existing: usize,
}

impl ScaffoldService {
    /// Create every planned directory, then every missing placeholder file.
    ///
    /// Safe to repeat: directories that exist are fine, and existing files
    /// are never opened for writing.
    #[instrument(skip_all, fields(root = %plan.root().display()))]
    pub fn scaffold(&self, plan: &ScaffoldPlan) -> HatchResult<ScaffoldReport> {
        let mut report = ScaffoldReport::default();

        for entry in plan.directories() {
            if !self.filesystem.is_dir(&entry.target) {
                report.directories_created += 1;
            }
            self.filesystem.create_dir_all(&entry.target)?;
            debug!(path = %entry.target.display(), "Directory ensured");
        }
        self.report(Stage::Scaffold, StepStatus::Done, "Folders created");

        for entry in plan.empty_files() {
            self.ensure_parent(&entry.target)?;
            if self.filesystem.touch(&entry.target)? {
                report.files_created += 1;
            } else {
                report.files_existing += 1;
            }
        }
        self.report(
            Stage::Scaffold,
            StepStatus::Done,
            format!(
                "Files created ({} new, {} already present)",
                report.files_created, report.files_existing
            ),
        );

        Ok(report)
    }
}
