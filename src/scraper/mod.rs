//! Scrape pipeline
//!
//! Runs the job country by country, strictly sequentially:
//!
//! 1. For every channel of the country, resolve its uploads playlist
//! 2. List the first page of that playlist
//! 3. Fetch each listed video and format it as a row
//! 4. Once all channels are done, write the country's file
//!
//! A rate-limit response or Ctrl+C stops the whole run; the country in
//! progress is not written.

pub mod progress;

use std::path::PathBuf;

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::api::YouTubeClient;
use crate::error::{Result, ScrapeError};
use crate::input::CountryJob;
use crate::output;
use crate::row;

pub use progress::ProgressTracker;

/// Counters for one country
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryReport {
    /// Country code
    pub country_code: String,
    /// Channels listed in the trending snapshot
    pub channels: usize,
    /// Channels skipped because they have no uploads playlist
    pub channels_without_uploads: usize,
    /// Video resources returned by the API
    pub videos: usize,
    /// Rows written
    pub rows: usize,
    /// Videos skipped for lacking statistics
    pub skipped: usize,
    /// Written file
    pub output_path: Option<PathBuf>,
}

/// Result of a complete run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Snapshot date of the run
    pub date: Option<NaiveDate>,
    /// One entry per written country, in job order
    pub countries: Vec<CountryReport>,
}

impl RunReport {
    /// Rows written across all countries
    pub fn total_rows(&self) -> usize {
        self.countries.iter().map(|c| c.rows).sum()
    }

    /// Videos fetched across all countries
    pub fn total_videos(&self) -> usize {
        self.countries.iter().map(|c| c.videos).sum()
    }
}

/// Sequential scraper over a loaded job
pub struct Scraper {
    client: YouTubeClient,
    output_dir: PathBuf,
    date: NaiveDate,
    cancel_token: CancellationToken,
    show_progress: bool,
}

impl Scraper {
    /// Create a new scraper
    ///
    /// # Arguments
    /// * `client` - API client
    /// * `output_dir` - Directory receiving the country files
    /// * `date` - Date used in output file names
    pub fn new(client: YouTubeClient, output_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            client,
            output_dir: output_dir.into(),
            date,
            cancel_token: CancellationToken::new(),
            show_progress: false,
        }
    }

    /// Use an externally owned cancellation token
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Scrape every country and write its file
    ///
    /// # Returns
    /// * `Result<RunReport>` - Per-country counters, or the error that stopped the run
    pub async fn run(&self, countries: &[CountryJob]) -> Result<RunReport> {
        let mut report = RunReport {
            date: Some(self.date),
            countries: Vec::with_capacity(countries.len()),
        };

        for country in countries {
            let (rows, mut country_report) = self.scrape_country(country).await?;
            let path =
                output::write_country_file(&self.output_dir, &country.code, self.date, &rows)
                    .await?;
            country_report.output_path = Some(path);
            report.countries.push(country_report);
        }

        info!(
            "Finished: {} countries, {} videos, {} rows",
            report.countries.len(),
            report.total_videos(),
            report.total_rows()
        );
        Ok(report)
    }

    /// Collect the rows of one country
    ///
    /// # Returns
    /// * `Result<(Vec<String>, CountryReport)>` - Rows in channel order and counters
    pub async fn scrape_country(&self, country: &CountryJob) -> Result<(Vec<String>, CountryReport)> {
        let tracker = ProgressTracker::new(
            &country.code,
            country.channel_ids.len() as u64,
            self.show_progress,
        );
        let mut report = CountryReport {
            country_code: country.code.clone(),
            channels: country.channel_ids.len(),
            ..CountryReport::default()
        };
        let mut rows = Vec::new();

        for channel_id in &country.channel_ids {
            let before = rows.len();
            let result = self.scrape_channel(channel_id, &mut rows, &mut report).await;
            if let Err(e) = result {
                tracker.finish();
                return Err(e);
            }
            tracker.channel_done((rows.len() - before) as u64);
        }

        tracker.finish();
        report.rows = rows.len();
        debug!(
            "{}: {} rows from {} channels in {:.1?}",
            country.code,
            report.rows,
            report.channels,
            tracker.elapsed()
        );

        Ok((rows, report))
    }

    async fn scrape_channel(
        &self,
        channel_id: &str,
        rows: &mut Vec<String>,
        report: &mut CountryReport,
    ) -> Result<()> {
        self.check_cancelled()?;
        let Some(playlist_id) = self.client.uploads_playlist_id(channel_id).await? else {
            info!("Skipping channel {}: no uploads playlist", channel_id);
            report.channels_without_uploads += 1;
            return Ok(());
        };

        self.check_cancelled()?;
        let video_ids = self.client.playlist_video_ids(&playlist_id).await?;
        debug!("Channel {}: {} recent uploads", channel_id, video_ids.len());

        for video_id in &video_ids {
            self.check_cancelled()?;
            let videos = self.client.videos(video_id).await?;
            let (formatted, skipped) = row::format_videos(&videos);

            if skipped > 0 {
                debug!("Video {} has no statistics, skipped", video_id);
            }

            report.videos += videos.len();
            report.skipped += skipped;
            rows.extend(formatted);
        }

        Ok(())
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel_token.is_cancelled() {
            Err(ScrapeError::Cancelled)
        } else {
            Ok(())
        }
    }
}
