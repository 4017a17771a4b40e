use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub const LOADING_MESSAGE: &str = "Analizzando la playlist...";

/// Spinner shown while an analysis request is pending.
///
/// Mounting starts the spinner; dropping the value clears it.
pub struct LoadingIndicator {
    pb: ProgressBar,
}

impl LoadingIndicator {
    pub fn mount() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// A spinner that draws nowhere, for non-interactive output.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(None, target);
        pb.set_style(spinner_style());
        pb.set_message(LOADING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    pub fn message(&self) -> String {
        self.pb.message()
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
}
