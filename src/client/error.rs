//! Word service error types

use thiserror::Error;

/// Failures of a word-matching request
///
/// Every variant is shown to the user as the same generic message; the
/// detail is for logs.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The service answered with a non-success status
    #[error("word service request failed with status {status}")]
    RequestFailed { status: u16 },

    /// The body was not a JSON array of strings
    #[error("could not decode word service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection, transport or body read failure
    #[error("could not reach word service: {0}")]
    Network(#[from] reqwest::Error),
}

impl QueryError {
    /// HTTP status for `RequestFailed`, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            Self::Decode(_) | Self::Network(_) => None,
        }
    }
}
