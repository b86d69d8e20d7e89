//! Trending snapshot reader
//!
//! A snapshot is a CSV written by an earlier trending scrape. Only its
//! `channelId` column is used here.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::{InputError, Result};

/// Column holding the channel ID in a trending snapshot
pub const CHANNEL_ID_COLUMN: &str = "channelId";

/// Path of a country's trending snapshot for a given date
pub fn trending_snapshot_path(dir: &Path, country_code: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!(
        "trending_{}_{}_videos.csv",
        country_code,
        date.format("%Y-%m-%d")
    ))
}

/// Read the distinct, non-empty channel IDs of a snapshot in first-seen order
pub fn read_channel_ids(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.display().to_string()).into());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == CHANNEL_ID_COLUMN)
        .ok_or_else(|| InputError::MissingColumn {
            path: path.display().to_string(),
            column: CHANNEL_ID_COLUMN.to_string(),
        })?;

    let mut seen = HashSet::new();
    let mut channel_ids = Vec::new();

    for record in reader.records() {
        let record = record?;
        let Some(id) = record.get(column).map(str::trim) else {
            continue;
        };
        if !id.is_empty() && seen.insert(id.to_string()) {
            channel_ids.push(id.to_string());
        }
    }

    Ok(channel_ids)
}
