//! Country file writer

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::row;

/// Path of a country's output file
pub fn output_file_path(dir: &Path, country_code: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!(
        "no_trending_{}_{}_videos.csv",
        country_code,
        date.format("%Y-%m-%d")
    ))
}

/// Create the output directory and its parents if missing
pub async fn ensure_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| {
            OutputError::CreateDir {
                path: dir.display().to_string(),
                source,
            }
            .into()
        })
}

/// Buffered writer for one country's file
///
/// The file is truncated on creation. Every line is terminated with `\n`.
pub struct CountryFileWriter {
    /// Buffered file writer
    writer: BufWriter<File>,
    /// Path to the output file
    path: PathBuf,
    /// Number of lines written, header included
    written: usize,
}

impl CountryFileWriter {
    /// Create (or truncate) the output file
    ///
    /// # Arguments
    /// * `path` - Output file path; its directory must exist
    ///
    /// # Returns
    /// * `Result<Self>` - New writer instance or error
    pub async fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .await
            .map_err(|source| write_error(path, source))?;

        debug!("Created output file: {}", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    /// Write a single line
    pub async fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(|source| write_error(&self.path, source))?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(|source| write_error(&self.path, source))?;
        self.written += 1;
        Ok(())
    }

    /// Write a batch of lines
    ///
    /// # Returns
    /// * `Result<usize>` - Number of lines written
    pub async fn write_lines(&mut self, lines: &[String]) -> Result<usize> {
        for line in lines {
            self.write_line(line).await?;
        }
        Ok(lines.len())
    }

    /// Flush buffered data to disk
    pub async fn finalize(&mut self) -> Result<()> {
        self.writer
            .flush()
            .await
            .map_err(|source| write_error(&self.path, source))?;

        debug!("Finalized {} ({} lines)", self.path.display(), self.written);
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.written
    }
}

fn write_error(path: &Path, source: std::io::Error) -> crate::error::ScrapeError {
    OutputError::Write {
        path: path.display().to_string(),
        source,
    }
    .into()
}

/// Write a country's header and rows to its output file
///
/// # Arguments
/// * `dir` - Output directory, created if missing
/// * `country_code` - Country code used in the file name
/// * `date` - Snapshot date used in the file name
/// * `rows` - Formatted rows
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written file
pub async fn write_country_file(
    dir: &Path,
    country_code: &str,
    date: NaiveDate,
    rows: &[String],
) -> Result<PathBuf> {
    info!("Writing {} data to file...", country_code);

    ensure_output_dir(dir).await?;
    let path = output_file_path(dir, country_code, date);

    let mut writer = CountryFileWriter::create(&path).await?;
    writer.write_line(&row::header()).await?;
    writer.write_lines(rows).await?;
    writer.finalize().await?;

    Ok(path)
}
