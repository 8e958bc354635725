//! Error types for the Reddwarf client

use reddwarf_core::CoreError;
use reddwarf_core::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by client calls
///
/// A non-2xx response is not an error for the handler methods; they report it
/// as `false`, an empty list or `None`. What remains here are failures to
/// build, send or decode a request.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the resource was not found
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the token was missing, expired or lacked access
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns true if the service reported a 5xx
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// Returns true if the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Request(err) => err.is_timeout(),
            ClientError::Status { status, .. } => *status == 408,
            _ => false,
        }
    }

    /// Returns true if sending the same request again may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Request(err) => err.is_timeout() || err.is_connect(),
            ClientError::Status { status, .. } => {
                matches!(status, 408 | 429 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
