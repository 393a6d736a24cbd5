//! Error types for the tracker data sources

use thiserror::Error;

/// Errors that can occur while talking to the tracker backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Response or fixture could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Fixture file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source has nothing to return for this request
    #[error("No data available for {0}")]
    Missing(&'static str),
}

/// Result type for data source operations
pub type Result<T> = std::result::Result<T, StoreError>;
