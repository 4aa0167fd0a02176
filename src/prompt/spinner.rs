//! Transient progress indicator.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A spinner shown while a request is in flight.
///
/// The spinner is cleared when [`stop`](Self::stop) is called or when it is
/// dropped, so an early `?` return never leaves it on screen.
pub struct Spinner {
    bar: ProgressBar,
}

impl std::fmt::Debug for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("hidden", &self.bar.is_hidden())
            .finish()
    }
}

impl Spinner {
    /// Starts a visible spinner on stderr.
    #[must_use]
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// A spinner that draws nothing.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Returns `true` if this spinner never draws.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Stops and clears the spinner.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_is_hidden() {
        let spinner = Spinner::hidden();
        assert!(spinner.is_hidden());
        spinner.stop();
    }
}
