//! Progress display for multi-image runs

use crate::io::configuration::{PROGRESS_BAR_THRESHOLD, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks how many images of a run have been written
///
/// Runs producing at most `PROGRESS_BAR_THRESHOLD` images stay silent.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            total: 0,
            completed: 0,
        }
    }

    /// Prepare the display for `total` images
    pub fn initialize(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;

        if total > PROGRESS_BAR_THRESHOLD {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(Self::style());
            self.bar = Some(bar);
        }
    }

    /// Record one written image
    pub fn complete_image(&mut self, name: &str) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Number of images recorded so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of images the run expects
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Close the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("{} images written", self.completed));
        }
    }

    fn style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
