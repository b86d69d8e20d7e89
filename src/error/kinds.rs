use std::{fmt, io};

/// Crate-wide `Result` type using [`ScrapeError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Message printed when the API answers with HTTP 429.
pub const RATE_LIMIT_MESSAGE: &str =
    "Temp-Banned due to excess requests, please wait and continue later";

/// Top-level error type for trendscrape operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum ScrapeError {
    /// Problems with the key, country list or trending snapshots.
    Input(InputError),

    /// YouTube Data API errors.
    Api(ApiError),

    /// Output file errors.
    Output(OutputError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// HTTP transport errors.
    Http(reqwest::Error),

    /// Malformed JSON in an API response.
    Json(serde_json::Error),

    /// Malformed trending snapshot.
    Csv(csv::Error),

    /// The run was interrupted with Ctrl+C.
    Cancelled,

    /// Generic error with a free-form message.
    Generic(String),
}

/// Input-specific errors.
#[derive(Debug)]
pub enum InputError {
    /// An input file does not exist.
    FileNotFound(String),

    /// The API key file is empty.
    EmptyApiKey(String),

    /// The country code file lists no codes.
    NoCountryCodes(String),

    /// A trending snapshot lacks a required column.
    MissingColumn { path: String, column: String },

    /// The snapshot date could not be parsed.
    InvalidDate(String),
}

/// API-specific errors.
#[derive(Debug)]
pub enum ApiError {
    /// HTTP 429: the key has been temporarily banned.
    RateLimited,

    /// A request URL could not be built.
    InvalidUrl(String),
}

/// Output-specific errors.
#[derive(Debug)]
pub enum OutputError {
    /// Failed to create the output directory.
    CreateDir { path: String, source: io::Error },

    /// Failed to create or write the output file.
    Write { path: String, source: io::Error },
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

impl ScrapeError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::Api(ApiError::RateLimited) => 2,
            ScrapeError::Cancelled => 130,
            _ => 1,
        }
    }

    /// True when the error is the API's rate limit response.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ScrapeError::Api(ApiError::RateLimited))
    }
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Input(e) => write!(f, "Input error: {e}"),
            ScrapeError::Api(e) => write!(f, "{e}"),
            ScrapeError::Output(e) => write!(f, "Output error: {e}"),
            ScrapeError::Config(e) => write!(f, "Configuration error: {e}"),
            ScrapeError::Io(e) => write!(f, "I/O error: {e}"),
            ScrapeError::Http(e) => write!(f, "HTTP error: {e}"),
            ScrapeError::Json(e) => write!(f, "Invalid API response: {e}"),
            ScrapeError::Csv(e) => write!(f, "Invalid trending snapshot: {e}"),
            ScrapeError::Cancelled => write!(f, "Interrupted"),
            ScrapeError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::FileNotFound(path) => write!(f, "File not found: {path}"),
            InputError::EmptyApiKey(path) => write!(f, "API key file is empty: {path}"),
            InputError::NoCountryCodes(path) => {
                write!(f, "No country codes listed in {path}")
            }
            InputError::MissingColumn { path, column } => {
                write!(f, "Column '{column}' not found in {path}")
            }
            InputError::InvalidDate(value) => {
                write!(f, "Invalid date '{value}', expected YYYY-MM-DD")
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RateLimited => write!(f, "{RATE_LIMIT_MESSAGE}"),
            ApiError::InvalidUrl(msg) => write!(f, "Invalid request URL: {msg}"),
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::CreateDir { path, source } => {
                write!(f, "Failed to create directory {path}: {source}")
            }
            OutputError::Write { path, source } => {
                write!(f, "Failed to write {path}: {source}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScrapeError::Io(e) => Some(e),
            ScrapeError::Http(e) => Some(e),
            ScrapeError::Json(e) => Some(e),
            ScrapeError::Csv(e) => Some(e),
            ScrapeError::Output(OutputError::CreateDir { source, .. })
            | ScrapeError::Output(OutputError::Write { source, .. }) => Some(source),
            _ => None,
        }
    }
}
impl std::error::Error for InputError {}
impl std::error::Error for ApiError {}
impl std::error::Error for OutputError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to ScrapeError ========================= */

impl From<io::Error> for ScrapeError {
    fn from(err: io::Error) -> Self {
        ScrapeError::Io(err)
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Http(err)
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        ScrapeError::Json(err)
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(err: csv::Error) -> Self {
        ScrapeError::Csv(err)
    }
}

impl From<InputError> for ScrapeError {
    fn from(err: InputError) -> Self {
        ScrapeError::Input(err)
    }
}

impl From<ApiError> for ScrapeError {
    fn from(err: ApiError) -> Self {
        ScrapeError::Api(err)
    }
}

impl From<OutputError> for ScrapeError {
    fn from(err: OutputError) -> Self {
        ScrapeError::Output(err)
    }
}

impl From<ConfigError> for ScrapeError {
    fn from(err: ConfigError) -> Self {
        ScrapeError::Config(err)
    }
}

impl From<String> for ScrapeError {
    fn from(msg: String) -> Self {
        ScrapeError::Generic(msg)
    }
}

impl From<&str> for ScrapeError {
    fn from(msg: &str) -> Self {
        ScrapeError::Generic(msg.to_owned())
    }
}
