//! Stage 5: owned content and the manifest patch.
//!
//! Content files are overwritten on every run so they always match the
//! payloads shipped with the tool. Placeholders are never touched here.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, ScaffoldService,
        ports::{Stage, StepStatus},
    },
    domain::{ProjectSpec, ScaffoldPlan, layout, manifest},
    error::HatchResult,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentReport {
    pub files_written: usize,
    pub manifest_patched: bool,
    pub warnings: usize,
}

impl ScaffoldService {
    /// Write every owned file, then patch the package manifest.
    ///
    /// An existing manifest is always patched. A missing one is fatal only
    /// when `package_installed` says the package manager should have written
    /// it; otherwise the patch is skipped with a warning.
    #[instrument(skip_all, fields(project = %spec.project_dir().display()))]
    pub fn write_content(
        &self,
        spec: &ProjectSpec,
        plan: &ScaffoldPlan,
        package_installed: bool,
    ) -> HatchResult<ContentReport> {
        let mut report = ContentReport::default();

        for entry in plan.content_files() {
            let payload = self
                .content
                .content(entry.anchor, &entry.relative)
                .ok_or_else(|| ApplicationError::ContentMissing {
                    path: entry.relative.to_slash_string(),
                })?;
            self.ensure_parent(&entry.target)?;
            self.filesystem.write_file(&entry.target, payload)?;
            debug!(path = %entry.target.display(), bytes = payload.len(), "Content written");
            report.files_written += 1;
        }
        self.report(
            Stage::Content,
            StepStatus::Done,
            format!("{} content files written", report.files_written),
        );

        let manifest_path = spec.project_dir().join(layout::PACKAGE_MANIFEST);
        if package_installed || self.filesystem.exists(&manifest_path) {
            self.patch_manifest(spec)?;
            report.manifest_patched = true;
        } else {
            report.warnings += 1;
            self.report(
                Stage::Content,
                StepStatus::Warning,
                format!(
                    "{} was not installed; {} left unpatched",
                    self.settings.ui_package,
                    layout::PACKAGE_MANIFEST
                ),
            );
        }

        info!(files = report.files_written, "Content stage finished");
        Ok(report)
    }

    /// Set `scripts.dev` in `<project>/package.json`, keeping everything else.
    pub fn patch_manifest(&self, spec: &ProjectSpec) -> HatchResult<()> {
        let path = spec.project_dir().join(layout::PACKAGE_MANIFEST);
        if !self.filesystem.exists(&path) {
            self.report(
                Stage::Content,
                StepStatus::Failed,
                format!("{} not found", layout::PACKAGE_MANIFEST),
            );
            return Err(ApplicationError::ManifestMissing { path }.into());
        }

        let current = self.filesystem.read_to_string(&path)?;
        let patched = manifest::set_script(&current, "dev", &self.settings.dev_script)
            .map_err(|e| ApplicationError::ManifestInvalid {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        self.filesystem.write_file(&path, &patched)?;

        self.report(
            Stage::Content,
            StepStatus::Done,
            format!("{} updated with dev script", layout::PACKAGE_MANIFEST),
        );
        Ok(())
    }
}
