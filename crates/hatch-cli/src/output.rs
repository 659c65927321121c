//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes status lines to stdout, honouring quiet mode and colour settings.
///
/// Quiet mode keeps warnings, moved to stderr.
#[derive(Debug, Clone)]
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
    err_term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto → Human on a TTY, Plain when piped.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
            err_term: Term::stderr(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// `✗ <msg>`. Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// `⚠ <msg>`. Goes to stderr in quiet mode instead of being dropped.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let line = self.paint_line("\u{26a0}", msg, |s| s.yellow().bold().to_string());
        if self.quiet {
            self.err_term.write_line(&line)
        } else {
            self.term.write_line(&line)
        }
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// `↷ <msg>` for steps that were already satisfied.
    pub fn skipped(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{21b7}", msg, |s| s.dimmed().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn marked(&self, marker: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint_line(marker, msg, paint))
    }

    fn paint_line(&self, marker: &str, msg: &str, paint: impl Fn(&str) -> String) -> String {
        if self.no_color {
            format!("{marker} {msg}")
        } else {
            format!("{} {msg}", paint(marker))
        }
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Spinners only make sense for a human on a terminal.
    pub fn wants_spinner(&self) -> bool {
        !self.quiet && self.resolved_format == OutputFormat::Human && self.term.is_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(!out.wants_spinner());
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(!manager(false, false, OutputFormat::Plain).supports_color());
        assert!(manager(false, false, OutputFormat::Human).supports_color());
        assert!(!manager(false, true, OutputFormat::Human).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn warnings_are_painted_unless_colour_is_off() {
        let plain = manager(true, true, OutputFormat::Plain);
        assert_eq!(plain.paint_line("!", "npm missing", |s| format!("<{s}>")), "! npm missing");
        let human = manager(false, false, OutputFormat::Human);
        assert_eq!(human.paint_line("!", "npm missing", |s| format!("<{s}>")), "<!> npm missing");
    }
}
