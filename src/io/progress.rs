//! Batch progress display for interactive runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Assets: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single batch progress bar, advanced once per attempted generation call
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the requested batch count
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Record one successfully generated asset
    pub fn asset_completed(&self, filename: &str) {
        self.bar.set_message(filename.to_string());
        self.bar.inc(1);
    }

    /// Record one failed generation call
    pub fn asset_failed(&self, index: usize) {
        self.bar.set_message(format!("index {index} failed"));
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self, succeeded: usize, requested: usize) {
        self.bar
            .finish_with_message(format!("{succeeded}/{requested} assets generated"));
    }
}
