//! VIN decoding errors

use thiserror::Error;

/// Errors that can occur while decoding a VIN
#[derive(Error, Debug)]
pub enum VinError {
    /// Input shorter than [`super::MIN_VIN_LENGTH`]
    #[error("VIN too short: need at least {min} characters, got {actual}")]
    TooShort {
        /// Required length
        min: usize,
        /// Characters supplied
        actual: usize,
    },

    /// Configured base URL cannot take a path segment
    #[error("Invalid VIN API URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("VIN API error: {0}")]
    Status(reqwest::StatusCode),

    /// Response body without a `Results` array
    #[error("VIN API response has no results")]
    NoResults,

    /// Body is not the expected JSON
    #[error("Invalid VIN API response: {0}")]
    Json(#[from] serde_json::Error),
}

impl VinError {
    /// Short text for the notification banner
    pub fn user_message(&self) -> &'static str {
        match self {
            VinError::TooShort { .. } => "Please enter a valid VIN.",
            _ => "VIN decode failed.",
        }
    }
}
