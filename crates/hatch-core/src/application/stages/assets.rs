//! Stage 4: front-end assets.
//!
//! Every step here is best-effort. Failures become `Warning` lines and are
//! counted; the run always proceeds to the content writer.

use std::path::Path;

use tracing::{instrument, warn};

use crate::{
    application::{
        ScaffoldService,
        ports::{Stage, StepStatus},
    },
    domain::{Anchor, ExternalCommand, ProjectSpec, RelativePath, RemoteAsset, layout},
};

/// Outcome of the asset stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetReport {
    /// The package manager ran and reported success.
    pub package_installed: bool,
    pub copied: usize,
    pub downloaded: usize,
    pub warnings: usize,
}

impl ScaffoldService {
    #[instrument(skip_all, fields(project = %spec.project_dir().display()))]
    pub fn fetch_assets(&self, spec: &ProjectSpec) -> AssetReport {
        let mut report = AssetReport::default();

        match self.locator.locate(&self.settings.package_manager) {
            Some(manager) => {
                let installed = self.install_ui_package(spec, &manager, &mut report);
                report.package_installed = installed;
                self.copy_dist_files(spec, &mut report);
            }
            None => {
                self.warn(
                    &mut report,
                    format!(
                        "{} not found on PATH; skipping {} install",
                        self.settings.package_manager, self.settings.ui_package
                    ),
                );
            }
        }

        for asset in self.remote_assets(&mut report) {
            self.download(spec, &asset, &mut report);
        }

        report
    }

    fn install_ui_package(
        &self,
        spec: &ProjectSpec,
        manager: &Path,
        report: &mut AssetReport,
    ) -> bool {
        let package = &self.settings.ui_package;
        self.report(
            Stage::Assets,
            StepStatus::Started,
            format!("Installing {package}..."),
        );

        let command = ExternalCommand::new(manager)
            .args(["install", package.as_str()])
            .current_dir(spec.project_dir());

        match self.runner.run(&command) {
            Ok(output) if output.success() => {
                self.report(Stage::Assets, StepStatus::Done, format!("{package} installed"));
                true
            }
            Ok(output) => {
                warn!(%command, exit_code = ?output.exit_code, stderr = %output.stderr, "Install failed");
                self.warn(report, format!("Error running: {command}"));
                false
            }
            Err(e) => {
                self.warn(report, format!("Error running: {command} ({e})"));
                false
            }
        }
    }

    fn copy_dist_files(&self, spec: &ProjectSpec, report: &mut AssetReport) {
        let project = spec.project_dir();
        let dist = project.join(layout::package_dist_dir(&self.settings.ui_package));
        let public_js = project.join(layout::PUBLIC_JS_DIR);

        for file in &self.settings.dist_files {
            let from = dist.join(file);
            let to = public_js.join(file);
            let copied = self
                .ensure_parent(&to)
                .and_then(|()| self.filesystem.copy_file(&from, &to));
            match copied {
                Ok(bytes) => {
                    report.copied += 1;
                    self.report(
                        Stage::Assets,
                        StepStatus::Done,
                        format!("{file} copied ({bytes} bytes)"),
                    );
                }
                Err(e) => self.warn(report, format!("Could not copy {file}: {e}")),
            }
        }
    }

    /// Assets to download for this host. An unsupported platform loses only
    /// the Tailwind binary.
    fn remote_assets(&self, report: &mut AssetReport) -> Vec<RemoteAsset> {
        let mut assets = Vec::with_capacity(2);

        match RelativePath::try_new(layout::PUBLIC_JS_DIR).and_then(|dir| dir.join("htmx.min.js")) {
            Ok(destination) => assets.push(RemoteAsset {
                label: "htmx.min.js".into(),
                url: self.settings.htmx_url.clone(),
                destination,
                executable: false,
            }),
            Err(e) => self.warn(report, format!("Invalid htmx destination: {e}")),
        }

        let platform = &self.settings.platform;
        match platform.tailwind_artifact() {
            Some(artifact) => match RelativePath::try_new(platform.tailwind_binary_name()) {
                Ok(destination) => assets.push(RemoteAsset {
                    label: "Tailwind CSS CLI".into(),
                    url: format!(
                        "{}/{artifact}",
                        self.settings.tailwind_release_url.trim_end_matches('/')
                    ),
                    destination,
                    executable: true,
                }),
                Err(e) => self.warn(report, format!("Invalid Tailwind destination: {e}")),
            },
            None => self.warn(
                report,
                format!("No Tailwind CSS CLI build for {platform}; skipping download"),
            ),
        }

        assets
    }

    fn download(&self, spec: &ProjectSpec, asset: &RemoteAsset, report: &mut AssetReport) {
        let target = spec.resolve(Anchor::Project, &asset.destination);
        self.report(
            Stage::Assets,
            StepStatus::Started,
            format!("Downloading {}...", asset.label),
        );

        let written = self
            .downloader
            .fetch(&asset.url)
            .and_then(|bytes| {
                self.ensure_parent(&target)?;
                self.filesystem.write_bytes(&target, &bytes)?;
                if asset.executable {
                    self.filesystem.set_permissions(&target, true)?;
                }
                Ok(bytes.len())
            });

        match written {
            Ok(bytes) => {
                report.downloaded += 1;
                self.report(
                    Stage::Assets,
                    StepStatus::Done,
                    format!("{} downloaded ({bytes} bytes)", asset.label),
                );
            }
            Err(e) => self.warn(report, format!("Failed to download {asset}: {e}")),
        }
    }

    fn warn(&self, report: &mut AssetReport, message: String) {
        report.warnings += 1;
        warn!(%message, "Asset step skipped");
        self.report(Stage::Assets, StepStatus::Warning, message);
    }
}
