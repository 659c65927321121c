//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hatch",
    bin_name = "hatch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Bootstrap a FastAPI + htmx + Tailwind web project",
    long_about = "Hatch creates a Python virtual environment, a fixed project tree, \
                  front-end assets (Flowbite, htmx, the Tailwind CSS CLI) and a set of \
                  starter templates inside FOLDER/NAME. Re-running it is safe: \
                  placeholders you edited are kept, owned files are refreshed.",
    after_help = "EXAMPLES:\n\
        \x20 hatch ~/code my-app\n\
        \x20 hatch --dry-run . shop\n\
        \x20 HATCH__INTERPRETER__PROGRAM=python3.12 hatch ~/code api",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Existing folder the project is created in.
    #[arg(value_name = "FOLDER", help = "Existing parent folder")]
    pub folder: PathBuf,

    /// Project name: ASCII letters, digits, `-` and `_`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Run preflight checks and print the plan without creating anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_folder_and_name() {
        let cli = Cli::parse_from(["hatch", "/tmp/work", "my-app"]);
        assert_eq!(cli.folder, PathBuf::from("/tmp/work"));
        assert_eq!(cli.name, "my-app");
        assert!(!cli.dry_run);
    }

    #[test]
    fn dry_run_flag() {
        let cli = Cli::parse_from(["hatch", "--dry-run", ".", "shop"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["hatch", "/tmp"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["hatch", "--quiet", "--verbose", ".", "app"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_help_matches_default_log_level() {
        let cmd = Cli::command();
        let verbose = cmd
            .get_arguments()
            .find(|a| a.get_id() == "verbose")
            .unwrap();
        let help = verbose.get_long_help().unwrap().to_string();
        assert!(help.contains("(none)  - warnings"));
        assert!(!help.contains("Only errors"));
    }
}
