use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Terminal spinner for the load stages. A hidden reporter accepts the same
/// calls and draws nothing.
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new_spinner(message: &str, hidden: bool) -> Self {
        if hidden {
            return Self::hidden();
        }

        let style = ProgressStyle::with_template("{spinner:.cyan} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let spinner = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.to_string());
        spinner.enable_steady_tick(TICK);

        Self {
            spinner: Some(spinner),
        }
    }

    pub fn hidden() -> Self {
        Self { spinner: None }
    }

    pub fn is_hidden(&self) -> bool {
        self.spinner.is_none()
    }

    pub fn set_message(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message.to_string());
        }
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    // An early return on error must not leave the spinner drawn.
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            if !spinner.is_finished() {
                spinner.finish_and_clear();
            }
        }
    }
}
