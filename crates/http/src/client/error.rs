//! Client error types

use thiserror::Error;

/// Errors produced by [`DepotClient`](super::DepotClient) calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure, no response at all
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server rejected the credentials or the session cookie
    #[error("authentication rejected: {0}")]
    AuthRejected(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-2xx status
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map an HTTP error status to an error variant
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthRejected(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::UnexpectedStatus {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this failure means "no session" rather than a broken client
    ///
    /// Transport errors, rejected credentials and malformed responses all
    /// collapse to an anonymous session; only configuration mistakes are
    /// worth surfacing past the store.
    pub fn is_session_collapse(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}
