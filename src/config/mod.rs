//! Configuration management for trendscrape
//!
//! This module handles loading, parsing, and managing configuration from various sources:
//! - Configuration file (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Largest page size accepted by the playlistItems endpoint
pub const MAX_PAGE_SIZE: u32 = 50;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input file configuration
    #[serde(default)]
    pub input: InputConfig,

    /// API client configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the run's input files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// File whose first line is the API key
    #[serde(default = "default_key_path")]
    pub key_path: PathBuf,

    /// File listing one country code per line
    #[serde(default = "default_country_code_path")]
    pub country_code_path: PathBuf,

    /// Directory holding `trending_{code}_{date}_videos.csv` snapshots
    #[serde(default = "default_trending_dir")]
    pub trending_dir: PathBuf,
}

/// YouTube Data API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Data API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of recent uploads requested per channel
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the per-country CSV files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Show a progress spinner while scraping
    #[serde(default = "default_progress")]
    pub progress: bool,

    /// Print a summary table when the run finishes
    #[serde(default = "default_summary")]
    pub summary: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_key_path() -> PathBuf {
    PathBuf::from("api_key.txt")
}

fn default_country_code_path() -> PathBuf {
    PathBuf::from("country_codes.txt")
}

fn default_trending_dir() -> PathBuf {
    PathBuf::from("trending")
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_max_results() -> u32 {
    5
}

fn default_timeout() -> u64 {
    30
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output/")
}

fn default_progress() -> bool {
    true
}

fn default_summary() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_path: default_key_path(),
            country_code_path: default_country_code_path(),
            trending_dir: default_trending_dir(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_results: default_max_results(),
            timeout: default_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            progress: default_progress(),
            summary: default_summary(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist. Without one the default path is tried and
    /// defaults are used when nothing is there.
    ///
    /// # Arguments
    /// * `path` - Optional path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - Path to default configuration file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trendscrape")
            .join("config.toml")
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Generic(e.to_string()).into())
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(invalid("api.base_url", &self.api.base_url));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.api.max_results) {
            return Err(invalid("api.max_results", &self.api.max_results.to_string()));
        }
        if self.api.timeout == 0 {
            return Err(invalid("api.timeout", "0"));
        }
        Ok(())
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout)
    }
}

fn invalid(field: &str, value: &str) -> crate::error::ScrapeError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
    .into()
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.key_path, PathBuf::from("api_key.txt"));
        assert_eq!(config.input.country_code_path, PathBuf::from("country_codes.txt"));
        assert_eq!(config.output.output_dir, PathBuf::from("output/"));
        assert_eq!(config.api.max_results, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [api]
            max_results = 10

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.max_results, 10);
        assert_eq!(config.api.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.input.trending_dir, PathBuf::from("trending"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[api\nmax_results = ").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Invalid config format"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.api.max_results = 0;
        assert!(config.validate().is_err());

        config.api.max_results = MAX_PAGE_SIZE + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api.timeout = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_from_file(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\noutput_dir = \"csv\"\nprogress = false").unwrap();

        let config = Config::load_from_file(Some(file.path())).unwrap();
        assert_eq!(config.output.output_dir, PathBuf::from("csv"));
        assert!(!config.output.progress);
        assert!(config.output.summary);
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = Config::default().to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.api.max_results, 5);
    }

    #[test]
    fn test_request_timeout() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
