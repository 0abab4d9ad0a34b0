//! Client error types
//!
//! [`ClientError`] covers construction and transport failures. Actions never
//! return it directly: at the action boundary it becomes
//! [`ActionError::Transport`] inside an `ActionResult::Failure`.

use shared::ActionError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request body could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Whether the request ran out of time rather than failing outright.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

impl From<ClientError> for ActionError {
    fn from(err: ClientError) -> Self {
        let message = match &err {
            _ if err.is_timeout() => "The server took too long to respond".to_string(),
            ClientError::Http(e) if e.is_connect() => "Could not reach the server".to_string(),
            other => other.to_string(),
        };
        ActionError::transport(message)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
