//! Error types for the adaptation layer.
//!
//! Everything below the transport and model-directory boundaries propagates
//! `LlmError` with `?`. The boundary methods convert errors into user-facing
//! result values; callers of [`crate::client::ChatClient`] never see a raw
//! error, status code, or provider body.

use thiserror::Error;

/// Unified error type.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network-level failure (DNS, timeout, connection reset).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-success HTTP status from the provider.
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Provider response body, kept for diagnostics only
        message: String,
        /// Parsed response body, when it was valid JSON
        details: Option<serde_json::Value>,
    },

    /// JSON serialization/deserialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Provider response did not have the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An attachment could not be read or encoded.
    #[error("attachment encoding failed: {0}")]
    EncodingError(String),

    /// No credential configured; a valid state, handled before any network call.
    #[error("no API key configured")]
    MissingApiKey,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
