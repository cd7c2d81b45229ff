//! Stage-level progress display
//!
//! Each pipeline stage gets a spinner while it runs. Display is owned
//! entirely by the CLI layer; the synthesis passes never report progress
//! themselves, which keeps their output independent of how they are driven.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates spinners for sequential pipeline stages
pub struct StageProgress {
    multi_progress: MultiProgress,
    enabled: bool,
}

impl StageProgress {
    /// Create a tracker; a disabled tracker displays nothing
    pub fn new(enabled: bool) -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            enabled,
        }
    }

    /// Start a spinner for a stage
    pub fn begin(&self, label: &'static str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message(label);
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(self.multi_progress.add(bar))
    }

    /// Finish a stage spinner with a completion message
    pub fn complete(bar: Option<ProgressBar>, label: &'static str) {
        if let Some(bar) = bar {
            bar.finish_with_message(label);
        }
    }
}
