//! trendscrape library
//!
//! Collects the most recent uploads of the channels found in per-country
//! trending snapshots and writes them to per-country CSV files, using the
//! YouTube Data API v3.
//!
//! # Modules
//!
//! - `api`: Data API client and response models
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `input`: API key, country codes and trending snapshots
//! - `output`: Country files and the run summary
//! - `row`: CSV row formatting
//! - `scraper`: The sequential scrape pipeline
//!
//! # Example
//!
//! ```no_run
//! use trendscrape::api::{HttpTransport, YouTubeClient};
//! use trendscrape::{Config, Scraper, input};
//!
//! #[tokio::main]
//! async fn main() -> trendscrape::Result<()> {
//!     let config = Config::default();
//!     let job = input::load_job(&config.input, input::today())?;
//!
//!     let transport = HttpTransport::new(&config.api.base_url, config.request_timeout())?;
//!     let client = YouTubeClient::new(Box::new(transport), job.api_key, config.api.max_results);
//!
//!     let report = Scraper::new(client, &config.output.output_dir, job.date)
//!         .run(&job.countries)
//!         .await?;
//!     println!("{} rows written", report.total_rows());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod row;
pub mod scraper;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ScrapeError};
pub use scraper::{RunReport, Scraper};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
