//! Run inputs
//!
//! Loads everything a scrape run needs before the first request is made:
//! - the API key (first line of the key file)
//! - the country codes (one per line)
//! - the distinct channel IDs of each country's trending snapshot

pub mod trending;

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::InputConfig;
use crate::error::{InputError, Result};

pub use trending::{read_channel_ids, trending_snapshot_path};

/// Everything needed to scrape one country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryJob {
    /// Country code as listed in the country code file
    pub code: String,
    /// Distinct channel IDs from the trending snapshot, first-seen order
    pub channel_ids: Vec<String>,
}

/// A fully loaded scrape run
#[derive(Debug, Clone)]
pub struct Job {
    /// Static API key
    pub api_key: String,
    /// Snapshot date used for input and output file names
    pub date: NaiveDate,
    /// Countries in the order of the country code file
    pub countries: Vec<CountryJob>,
}

/// Read the API key from the first line of a file
///
/// # Arguments
/// * `path` - Key file
///
/// # Returns
/// * `Result<String>` - Trimmed key
pub fn read_api_key(path: &Path) -> Result<String> {
    let content = read_input_file(path)?;
    let key = content.lines().next().unwrap_or("").trim();

    if key.is_empty() {
        return Err(InputError::EmptyApiKey(path.display().to_string()).into());
    }

    Ok(key.to_string())
}

/// Read country codes, one per line
///
/// Trailing whitespace is stripped and blank lines are ignored.
pub fn read_country_codes(path: &Path) -> Result<Vec<String>> {
    let content = read_input_file(path)?;
    let codes: Vec<String> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if codes.is_empty() {
        return Err(InputError::NoCountryCodes(path.display().to_string()).into());
    }

    Ok(codes)
}

/// Parse a `YYYY-MM-DD` snapshot date
pub fn parse_snapshot_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(value.to_string()).into())
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Load the key, country list and every country's channel IDs
///
/// # Arguments
/// * `inputs` - Input file locations
/// * `date` - Trending snapshot date
///
/// # Returns
/// * `Result<Job>` - Loaded job or the first input error
pub fn load_job(inputs: &InputConfig, date: NaiveDate) -> Result<Job> {
    let api_key = read_api_key(&inputs.key_path)?;
    let codes = read_country_codes(&inputs.country_code_path)?;
    debug!("Loaded {} country codes", codes.len());

    let mut countries = Vec::with_capacity(codes.len());
    for code in codes {
        let snapshot = trending_snapshot_path(&inputs.trending_dir, &code, date);
        let channel_ids = read_channel_ids(&snapshot)?;
        info!("{}: {} channels in {}", code, channel_ids.len(), snapshot.display());
        countries.push(CountryJob { code, channel_ids });
    }

    Ok(Job {
        api_key,
        date,
        countries,
    })
}

fn read_input_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.display().to_string()).into());
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_api_key_first_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");
        fs::write(&path, "AIzaKEY123\r\nsecond line\n").unwrap();

        assert_eq!(read_api_key(&path).unwrap(), "AIzaKEY123");
    }

    #[test]
    fn test_read_api_key_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");
        fs::write(&path, "\n").unwrap();

        assert!(matches!(
            read_api_key(&path),
            Err(crate::error::ScrapeError::Input(InputError::EmptyApiKey(_)))
        ));
    }

    #[test]
    fn test_read_api_key_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_api_key(&dir.path().join("missing.txt")),
            Err(crate::error::ScrapeError::Input(InputError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_read_country_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("country_codes.txt");
        fs::write(&path, "US  \nGB\r\n\nMX\n").unwrap();

        assert_eq!(read_country_codes(&path).unwrap(), vec!["US", "GB", "MX"]);
    }

    #[test]
    fn test_read_country_codes_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("country_codes.txt");
        fs::write(&path, "\n\n").unwrap();

        assert!(read_country_codes(&path).is_err());
    }

    #[test]
    fn test_parse_snapshot_date() {
        let date = parse_snapshot_date("2024-03-09").unwrap();
        assert_eq!(date.to_string(), "2024-03-09");
        assert!(parse_snapshot_date("09/03/2024").is_err());
    }

    #[test]
    fn test_load_job() {
        let dir = tempfile::tempdir().unwrap();
        let trending = dir.path().join("trending");
        fs::create_dir(&trending).unwrap();
        fs::write(dir.path().join("key.txt"), "KEY\n").unwrap();
        fs::write(dir.path().join("codes.txt"), "US\nGB\n").unwrap();
        fs::write(
            trending.join("trending_US_2024-01-02_videos.csv"),
            "video_id,channelId\na,UC1\nb,UC2\nc,UC1\n",
        )
        .unwrap();
        fs::write(
            trending.join("trending_GB_2024-01-02_videos.csv"),
            "video_id,channelId\nd,UC9\n",
        )
        .unwrap();

        let inputs = InputConfig {
            key_path: dir.path().join("key.txt"),
            country_code_path: dir.path().join("codes.txt"),
            trending_dir: trending,
        };
        let job = load_job(&inputs, parse_snapshot_date("2024-01-02").unwrap()).unwrap();

        assert_eq!(job.api_key, "KEY");
        assert_eq!(
            job.countries,
            vec![
                CountryJob {
                    code: "US".to_string(),
                    channel_ids: vec!["UC1".to_string(), "UC2".to_string()],
                },
                CountryJob {
                    code: "GB".to_string(),
                    channel_ids: vec!["UC9".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_load_job_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("key.txt"), "KEY\n").unwrap();
        fs::write(dir.path().join("codes.txt"), "CA\n").unwrap();

        let inputs = InputConfig {
            key_path: dir.path().join("key.txt"),
            country_code_path: dir.path().join("codes.txt"),
            trending_dir: dir.path().join("trending"),
        };

        assert!(load_job(&inputs, today()).is_err());
    }
}
