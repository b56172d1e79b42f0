//! Error types for the Gemini advisory client.

use thiserror::Error;

/// Errors that can occur when interacting with the Gemini API.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status string from the API (e.g., `INVALID_ARGUMENT`).
        status: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited")]
    RateLimited,

    /// Failed to parse the response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The model answered with no usable content.
    #[error("empty response")]
    EmptyResponse,
}

/// API error response envelope from Gemini.
#[derive(Debug, serde::Deserialize)]
pub(super) struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub(super) struct ApiError {
    /// Error message.
    pub message: String,
    /// Status string (e.g., `INVALID_ARGUMENT`).
    #[serde(default)]
    pub status: String,
}
