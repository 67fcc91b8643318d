//! Batch progress display for multi-chart runs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Charts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Single-bar progress display for chart batches
///
/// Single-chart runs stay silent; the bar only appears when a batch has
/// more than one job.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the batch bar for the given job count
    pub fn initialize(&mut self, jobs: usize) {
        if jobs > 1 {
            let bar = ProgressBar::new(jobs as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Show the job currently being generated
    pub fn start_job(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Advance the batch bar by one completed job
    pub fn complete_job(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("All charts generated");
        }
    }
}
