//! Error types for LiquidPlanner API operations.

use thiserror::Error;

/// Errors that can occur during LiquidPlanner API operations.
///
/// Error-shaped response bodies (validation failures, missing items) are not
/// errors on the untyped surface: resource methods return them as data.
/// Only the typed [`Get`](crate::Get)/[`List`](crate::List)/[`Create`](crate::Create)
/// layer turns them into [`LiquidPlannerError::ApiError`].
#[derive(Debug, Error)]
pub enum LiquidPlannerError {
    /// Configuration is missing or incomplete.
    #[error("LiquidPlanner configuration required: {0}")]
    ConfigMissing(String),

    /// The remote service answered with an error-shaped body.
    #[error("LiquidPlanner API error {kind}: {message}")]
    ApiError { kind: String, message: String },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A payload could not be encoded, or a response did not fit a typed model.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The response body was not JSON.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    DecodeError {
        status: u16,
        body: String,
        source: serde_json::Error,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Still throttled after the retry budget was spent.
    #[error("Throttled by LiquidPlanner, gave up after {attempts} attempts")]
    Throttled { attempts: u32 },
}

/// Result type alias for LiquidPlanner operations.
pub type Result<T> = core::result::Result<T, LiquidPlannerError>;
