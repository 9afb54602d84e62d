// src/progress.rs
//! Progress bar using indicatif

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar wrapper; a no-op when disabled
pub struct ProgressIndicator {
    bar: Option<ProgressBar>,
}

impl ProgressIndicator {
    /// Create a new progress indicator
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
        {
            bar.set_style(style.progress_chars("=> "));
        }

        Self { bar: Some(bar) }
    }

    /// Reset the bar for a new batch of `total` items
    pub fn start(&self, total: u64, msg: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_length(total);
            bar.set_position(0);
            bar.set_message(msg.to_string());
        }
    }

    /// Mark one item as done
    pub fn advance(&self, item: &str) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(item.to_string());
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Check if progress indicator is enabled
    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.finish();
    }
}
