//! Error types for diary-core

use thiserror::Error;

/// Result type alias using diary-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in diary-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A draft failed client-side validation; nothing was sent to the server
    #[error("{0}")]
    Validation(String),

    /// Transport-level HTTP failure
    #[error("Entry API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Entry API error: {0}")]
    Api(String),

    /// The configured API base URL is unusable
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl Error {
    /// Whether this error came from the remote API rather than local
    /// validation or configuration.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api(_))
    }
}
