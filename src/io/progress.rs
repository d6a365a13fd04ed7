//! Progress display for batch variant generation

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar wrapper for a materials × qualities × seeds batch
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Create a progress bar sized to the batch, or a hidden one when quiet
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] Variants: [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        };
        Self { bar }
    }

    /// Record one completed variant
    pub fn tick(&self) {
        self.bar.inc(1);
    }

    /// Finish the bar with a completion message
    pub fn finish(&self) {
        self.bar.finish_with_message("Batch complete");
    }
}
