//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole provisioning run:
//! 1. Preflight: interpreter version, root folder, project name
//! 2. Environment: virtual environment + dependency install (fatal on failure)
//! 3. Scaffold: directory tree and placeholder files (idempotent)
//! 4. Assets: UI package, dist copies, remote downloads (never fatal)
//! 5. Content: owned files overwritten, manifest patched
//!
//! Control flows strictly top to bottom. A fatal error ends the run where it
//! happens; nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{
            CommandRunner, ContentStore, Downloader, Filesystem, ProgressReporter, Stage,
            StepStatus, ToolLocator,
        },
        settings::ProvisionSettings,
        stages::{AssetReport, ContentReport, ScaffoldReport},
    },
    domain::{DomainValidator as validator, ProjectSpec, ScaffoldPlan},
    error::HatchResult,
};

/// Raw user input, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub root: PathBuf,
    pub name: String,
}

impl ScaffoldRequest {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }
}

/// The driven ports a [`ScaffoldService`] works through.
pub struct Adapters {
    pub filesystem: Box<dyn Filesystem>,
    pub runner: Box<dyn CommandRunner>,
    pub locator: Box<dyn ToolLocator>,
    pub downloader: Box<dyn Downloader>,
    pub content: Box<dyn ContentStore>,
    pub reporter: Box<dyn ProgressReporter>,
}

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub spec: ProjectSpec,
    pub scaffold: ScaffoldReport,
    pub assets: AssetReport,
    pub content: ContentReport,
}

impl RunSummary {
    /// Non-fatal problems reported along the way.
    pub fn warnings(&self) -> usize {
        self.assets.warnings + self.content.warnings
    }

    pub fn project_dir(&self) -> PathBuf {
        self.spec.project_dir()
    }
}

/// Main provisioning service.
pub struct ScaffoldService {
    pub(crate) settings: ProvisionSettings,
    pub(crate) filesystem: Box<dyn Filesystem>,
    pub(crate) runner: Box<dyn CommandRunner>,
    pub(crate) locator: Box<dyn ToolLocator>,
    pub(crate) downloader: Box<dyn Downloader>,
    pub(crate) content: Box<dyn ContentStore>,
    pub(crate) reporter: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    /// Create a new service with the given settings and adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hatch_core::application::{Adapters, ProvisionSettings, ScaffoldRequest, ScaffoldService};
    ///
    /// # fn adapters() -> Adapters { unimplemented!() }
    /// let service = ScaffoldService::new(ProvisionSettings::default(), adapters());
    /// service.run(&ScaffoldRequest::new("/work", "demo")).unwrap();
    /// ```
    pub fn new(settings: ProvisionSettings, adapters: Adapters) -> Self {
        Self {
            settings,
            filesystem: adapters.filesystem,
            runner: adapters.runner,
            locator: adapters.locator,
            downloader: adapters.downloader,
            content: adapters.content,
            reporter: adapters.reporter,
        }
    }

    pub fn settings(&self) -> &ProvisionSettings {
        &self.settings
    }

    /// Run every stage: Validate → Provision → Scaffold → FetchAssets → WriteContent.
    #[instrument(
        skip_all,
        fields(root = %request.root.display(), project = %request.name)
    )]
    pub fn run(&self, request: &ScaffoldRequest) -> HatchResult<RunSummary> {
        let (spec, plan) = self.plan(request)?;

        self.provision_environment(&spec)?;
        let scaffold = self.scaffold(&plan)?;
        let assets = self.fetch_assets(&spec);
        let content = self.write_content(&spec, &plan, assets.package_installed)?;

        info!(
            project = %spec.project_dir().display(),
            warnings = assets.warnings + content.warnings,
            "Provisioning completed"
        );

        Ok(RunSummary {
            spec,
            scaffold,
            assets,
            content,
        })
    }

    /// Preflight plus plan derivation, with no mutation. Backs `--dry-run`.
    pub fn plan(&self, request: &ScaffoldRequest) -> HatchResult<(ProjectSpec, ScaffoldPlan)> {
        let spec = self.preflight(request)?;
        let plan = validator::plan_for(&spec)?;
        Ok((spec, plan))
    }

    // -------------------------------------------------------------------------
    // Helpers shared by the stages
    // -------------------------------------------------------------------------

    pub(crate) fn report(&self, stage: Stage, status: StepStatus, message: impl AsRef<str>) {
        self.reporter.report(stage, status, message.as_ref());
    }

    /// Create the parent directory of `path`, if it has one.
    pub(crate) fn ensure_parent(&self, path: &Path) -> HatchResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                self.filesystem.create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{Harness, version_ok};

    #[test]
    fn full_run_reaches_content_writer() {
        let mut h = Harness::new();
        h.runner_ok();
        h.locate_npm(true);
        h.downloads_ok();
        h.fs.put_file("/work/demo/package.json", r#"{"name":"demo"}"#);
        h.fs.put_file("/work/demo/node_modules/flowbite/dist/flowbite.min.js", "fb");
        h.fs.put_file("/work/demo/node_modules/flowbite/dist/flowbite.min.js.map", "{}");

        let summary = h.service().run(&ScaffoldRequest::new("/work", "demo")).unwrap();

        assert_eq!(summary.warnings(), 0);
        assert!(summary.content.manifest_patched);
        let base = h.fs.read("/work/demo/frontend/templates/_base.html").unwrap();
        assert!(!base.is_empty());
    }

    #[test]
    fn missing_package_manager_still_completes_with_warning() {
        let mut h = Harness::new();
        h.runner_ok();
        h.locate_npm(false);
        h.downloads_ok();

        let summary = h.service().run(&ScaffoldRequest::new("/work", "demo")).unwrap();

        assert!(summary.warnings() >= 1);
        assert!(!summary.content.manifest_patched);
        assert!(h.fs.exists_str("/work/demo/main.py"));
        assert!(h.reporter.count(StepStatus::Warning) >= 1);
    }

    #[test]
    fn environment_failure_stops_before_scaffold() {
        let mut h = Harness::new();
        h.runner.expect_run().returning(|cmd| {
            let line = cmd.to_string();
            if line.ends_with("--version") {
                Ok(version_ok("Python 3.12.1"))
            } else {
                Ok(crate::domain::CommandOutput {
                    exit_code: Some(42),
                    stdout: "partial".into(),
                    stderr: "venv exploded".into(),
                })
            }
        });

        let err = h
            .service()
            .run(&ScaffoldRequest::new("/work", "demo"))
            .unwrap_err();

        assert_eq!(err.command_exit_code(), Some(42));
        assert!(!h.fs.exists_str("/work/demo/backend/database"));
        assert!(!h.fs.exists_str("/work/demo/tests/__init__.py"));
    }

    #[test]
    fn invalid_name_halts_before_any_mutation() {
        let mut h = Harness::new();
        h.runner.expect_run().times(1).returning(|_| Ok(version_ok("Python 3.12.1")));

        let err = h
            .service()
            .run(&ScaffoldRequest::new("/work", "bad/name"))
            .unwrap_err();

        assert!(matches!(
            err,
            crate::error::HatchError::Domain(crate::domain::DomainError::InvalidProjectName { .. })
        ));
        assert_eq!(h.fs.write_count(), 0);
    }

    #[test]
    fn plan_does_not_touch_the_filesystem() {
        let mut h = Harness::new();
        h.runner_ok();

        let (spec, plan) = h.service().plan(&ScaffoldRequest::new("/work", "demo")).unwrap();

        assert_eq!(spec.name().as_str(), "demo");
        assert!(plan.entry_count() > 0);
        assert_eq!(h.fs.write_count(), 0);
    }
}
