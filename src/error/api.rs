use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured error information extracted from a YouTube Data API error body.
///
/// The API answers failed requests with
/// `{"error": {"code": 403, "message": "...", "errors": [{"reason": "..."}]}}`.
/// Only the fields useful for logging are kept.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorReason>,
}

/// One entry of the `errors` array of an API error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    error: ErrorInfo,
}

impl ErrorInfo {
    /// Extract error information from a response body.
    ///
    /// Returns `None` when the body is not an API error document.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        serde_json::from_value::<Envelope>(body.clone())
            .ok()
            .map(|envelope| envelope.error)
    }

    /// First machine-readable reason, e.g. `quotaExceeded` or `keyInvalid`.
    pub fn reason(&self) -> Option<&str> {
        self.errors.iter().find_map(|e| e.reason.as_deref())
    }

    /// Convert error info to compact JSON string (single line).
    pub fn to_json_compact(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message.as_deref().unwrap_or("unknown error");
        match (self.code, self.reason()) {
            (Some(code), Some(reason)) => write!(f, "{code} {reason}: {message}"),
            (Some(code), None) => write!(f, "{code}: {message}"),
            (None, Some(reason)) => write!(f, "{reason}: {message}"),
            (None, None) => write!(f, "{message}"),
        }
    }
}
