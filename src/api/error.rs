//! Error types for the registration endpoints

use thiserror::Error;

/// Failure talking to the options or submission endpoint
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure: connect, TLS, timeout
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// The response body did not have the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
