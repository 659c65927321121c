//! Console implementation of the core's progress port.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use hatch_core::application::ports::{ProgressReporter, Stage, StepStatus};

use crate::output::OutputManager;

/// Prints one line per step. `Started` steps show a spinner on a terminal
/// until the step's next line arrives.
pub struct ConsoleReporter {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: &str) -> bool {
        if !self.output.wants_spinner() {
            return false;
        }
        let Ok(mut slot) = self.spinner.lock() else {
            return false;
        };
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        if let Some(previous) = slot.replace(bar) {
            previous.finish_and_clear();
        }
        true
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(bar) = slot.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&self, stage: Stage, status: StepStatus, message: &str) {
        tracing::debug!(%stage, ?status, message, "Step");

        if status == StepStatus::Started {
            if !self.start_spinner(message) {
                let _ = self.output.info(message);
            }
            return;
        }

        self.stop_spinner();
        // A closed stdout must not abort provisioning.
        let _ = match status {
            StepStatus::Done => self.output.success(message),
            StepStatus::Skipped => self.output.skipped(message),
            StepStatus::Warning => self.output.warning(message),
            StepStatus::Failed => self.output.error(message),
            StepStatus::Started => Ok(()),
        };
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;

    fn reporter() -> ConsoleReporter {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        ConsoleReporter::new(OutputManager::new(&args, &AppConfig::default()))
    }

    #[test]
    fn plain_output_never_spins() {
        let reporter = reporter();
        reporter.report(Stage::Environment, StepStatus::Started, "Installing dependencies...");
        assert!(reporter.spinner.lock().unwrap().is_none());
        reporter.report(Stage::Environment, StepStatus::Done, "Dependencies installed");
    }
}
