//! Busy indicator shown while waiting on the oracle

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner displayed during a single oracle round trip.
///
/// One request is in flight at a time, so the spinner doubles as the
/// busy flag: start it before the call, finish it when the call
/// resolves either way.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);
        Self { bar }
    }

    /// Stop and erase the spinner line.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}
