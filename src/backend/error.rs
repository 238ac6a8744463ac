//! Backend fetch errors
//!
//! All three variants collapse to the same user-facing message in the
//! controller; the distinction only shows up in logs.

use thiserror::Error;

/// Errors from a single backend request
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (connect, TLS, timeout, body read)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("Backend returned HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON array
    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// True for network and status failures, false for malformed bodies
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Client(_) | Self::Network(_) | Self::Status(_))
    }
}
