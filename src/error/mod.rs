//! Error handling for trendscrape.
//!
//! This module provides:
//! - Application-specific error kinds for each stage of a scrape run
//! - Structured extraction of YouTube Data API error bodies for logging
//!
//! # Example
//!
//! ```rust,no_run
//! use trendscrape::error::{ApiError, Result, ScrapeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ApiError::RateLimited.into())
//! }
//!
//! if let Err(ScrapeError::Api(ApiError::RateLimited)) = example_operation() {
//!     eprintln!("slow down");
//! }
//! ```

pub mod api;
pub mod kinds;

// Re-export commonly used types
pub use api::{ErrorInfo, ErrorReason};
pub use kinds::{ApiError, ConfigError, InputError, OutputError, Result, ScrapeError};
