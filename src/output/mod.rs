//! Output files
//!
//! One CSV file per country, named
//! `no_trending_{code}_{YYYY-MM-DD}_videos.csv`, holding the header line and
//! one line per formatted video.

pub mod summary;
pub mod writer;

pub use summary::render_summary;
pub use writer::{CountryFileWriter, ensure_output_dir, output_file_path, write_country_file};
