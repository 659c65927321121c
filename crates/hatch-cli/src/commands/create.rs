//! The single `hatch FOLDER NAME` command.

use tracing::{info, instrument};

use hatch_adapters::{
    EmbeddedContentStore, HttpDownloader, LocalFilesystem, PathLocator, ProcessRunner,
};
use hatch_core::{
    application::{Adapters, RunSummary, ScaffoldRequest, ScaffoldService},
    domain::{EntryKind, ScaffoldPlan},
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    reporter::ConsoleReporter,
};

/// Execute a provisioning run (or a dry run) for `cli.folder/cli.name`.
///
/// 1. Build settings and production adapters from the configuration
/// 2. `--dry-run`: preflight + plan, then print the plan
/// 3. Otherwise run all five stages and print next steps
#[instrument(skip_all, fields(folder = %cli.folder.display(), name = %cli.name))]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = config.provision_settings()?;
    let adapters = Adapters {
        filesystem: Box::new(LocalFilesystem::new()),
        runner: Box::new(ProcessRunner::new()),
        locator: Box::new(PathLocator::new()),
        downloader: Box::new(HttpDownloader::new(config.download_timeout())?),
        content: Box::new(EmbeddedContentStore::new()),
        reporter: Box::new(ConsoleReporter::new(output.clone())),
    };
    let service = ScaffoldService::new(settings, adapters);
    let request = ScaffoldRequest::new(&cli.folder, &cli.name);

    if cli.dry_run {
        let (_, plan) = service.plan(&request)?;
        return show_plan(&plan, &output);
    }

    let summary = service.run(&request)?;
    info!(warnings = summary.warnings(), "Run finished");
    show_summary(&summary, &service, &output)
}

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    output
        .header(&format!("Dry run: {} paths under {}", plan.entry_count(), plan.root().display()))
        .with_cli_context(|| "writing plan")?;

    for entry in plan.entries() {
        let verb = match entry.kind {
            EntryKind::Directory => "mkdir    ",
            EntryKind::EmptyFile => "touch    ",
            EntryKind::ContentFile => "overwrite",
        };
        output
            .print(&format!("  {verb} {}", entry.target.display()))
            .with_cli_context(|| "writing plan")?;
    }
    Ok(())
}

fn show_summary(
    summary: &RunSummary,
    service: &ScaffoldService,
    output: &OutputManager,
) -> CliResult<()> {
    let project = summary.project_dir();
    let env_dir = summary.spec.environment_dir(&service.settings().environment_dir);
    let activate = if cfg!(windows) {
        env_dir.join("Scripts").join("activate")
    } else {
        env_dir.join("bin").join("activate")
    };

    output.print("").with_cli_context(|| "writing summary")?;
    let headline = if summary.warnings() == 0 {
        output.success(&format!("Project ready at {}", project.display()))
    } else {
        output.warning(&format!(
            "Project ready at {} with {} warning(s); see above",
            project.display(),
            summary.warnings()
        ))
    };
    headline.with_cli_context(|| "writing summary")?;

    output.header("Next steps:").with_cli_context(|| "writing summary")?;
    for step in [
        format!("cd {}", project.display()),
        format!("source {}", activate.display()),
        "npm run dev        # Tailwind watcher".to_string(),
        "fastapi dev main.py".to_string(),
    ] {
        output
            .print(&format!("  {step}"))
            .with_cli_context(|| "writing summary")?;
    }
    Ok(())
}
