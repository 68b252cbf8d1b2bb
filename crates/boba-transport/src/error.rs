//! Transport errors.

use thiserror::Error;

/// Transport errors.
///
/// Every variant ends up as the same apologetic assistant message; the
/// distinction only matters for logs.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint URL could not be parsed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP client could not be constructed.
    #[error("client setup failed: {0}")]
    Setup(String),

    /// Connection failed or was interrupted.
    #[error("connection failed: {0}")]
    Connection(String),

    /// No response within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Service answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Response body was not a valid chat response.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Connection(e.to_string())
        }
    }
}
