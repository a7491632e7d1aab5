//! Backend client error types

use thiserror::Error;

/// Errors that can occur when talking to the Nexhale backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused or DNS failure
    #[error("Nexhale API unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,

    /// Missing or expired session token; the user must log in again
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Transient failures worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Unavailable | ClientError::Timeout | ClientError::RateLimited
        )
    }
}

/// Result type alias for backend calls
pub type ClientResult<T> = Result<T, ClientError>;
