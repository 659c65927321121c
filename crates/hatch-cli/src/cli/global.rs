//! Flags that shape how a run talks to the user, not what it provisions.

use std::path::PathBuf;

use clap::Args;

/// Verbosity, colour, config file and status-line rendering.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Diagnostics on stderr. Warnings only by default; `-v` info,
    /// `-vv` debug, `-vvv` trace. `RUST_LOG` overrides all of them.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Show more diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Diagnostic log level, written to stderr:
    (none)  - warnings
    -v      - info: stage boundaries and external commands
    -vv     - debug: every path written and every command output
    -vvv    - trace
RUST_LOG replaces this filter when set."
    )]
    pub verbose: u8,

    /// Drop status lines. Warnings move to stderr, failures still print.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Hide step status lines; warnings go to stderr"
    )]
    pub quiet: bool,

    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        help = "Print status lines without ANSI colours"
    )]
    pub no_color: bool,

    /// Must exist when given. Without it the per-user `config.toml` is read
    /// if present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read settings from FILE (interpreter, frontend, assets)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Status line style"
    )]
    pub output_format: OutputFormat,
}

/// Status line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured markers and a spinner while commands run.
    Human,
    /// Uncoloured markers, no spinner.
    Plain,
}
