//! Completion errors

use thiserror::Error;

/// Errors that can occur during a completion request
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Failed to connect to the completion endpoint
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the completion endpoint failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed or expected fields were missing
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out at the transport layer
    #[error("Request timed out")]
    Timeout,

    /// Provider returned a non-success status
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
