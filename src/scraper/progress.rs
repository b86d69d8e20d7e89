//! Progress tracking for a country's channels
//!
//! Shows a progress bar over the channels of the country being scraped, with
//! the running row count as its message.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress tracker for one country
pub struct ProgressTracker {
    /// Channels finished so far
    channels: AtomicU64,
    /// Rows formatted so far
    rows: AtomicU64,
    /// Start time of the country
    start_time: Instant,
    /// Progress bar (optional, can be disabled)
    bar: Option<ProgressBar>,
}

impl ProgressTracker {
    /// Create a new progress tracker
    ///
    /// # Arguments
    /// * `country_code` - Shown as the bar's prefix
    /// * `total_channels` - Number of channels to visit
    /// * `enable_bar` - Whether to display a progress bar
    pub fn new(country_code: &str, total_channels: u64, enable_bar: bool) -> Self {
        let bar = enable_bar.then(|| {
            let bar = ProgressBar::new(total_channels);
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix} [{bar:30.cyan/blue}] {pos}/{len} channels {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
            bar.set_style(style);
            bar.set_prefix(country_code.to_string());
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });

        Self {
            channels: AtomicU64::new(0),
            rows: AtomicU64::new(0),
            start_time: Instant::now(),
            bar,
        }
    }

    /// Record a finished channel and the rows it produced
    pub fn channel_done(&self, rows: u64) {
        let channels = self.channels.fetch_add(1, Ordering::Relaxed) + 1;
        let rows = self.rows.fetch_add(rows, Ordering::Relaxed) + rows;

        if let Some(ref bar) = self.bar {
            bar.set_position(channels);
            bar.set_message(format!("({} rows)", rows));
        }
    }

    /// Channels finished so far
    pub fn channels(&self) -> u64 {
        self.channels.load(Ordering::Relaxed)
    }

    /// Rows formatted so far
    pub fn rows(&self) -> u64 {
        self.rows.load(Ordering::Relaxed)
    }

    /// Time since the tracker was created
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
