//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// True for 401 responses, the one class handled globally by the
    /// session layer rather than surfaced to the calling view.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Short message suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => "Network error. Check your connection and try again.".to_string(),
            Self::AuthenticationFailed(_) => "Your session has expired. Please sign in.".to_string(),
            Self::BadRequest(message)
            | Self::Forbidden(message)
            | Self::NotFound(message) => message.clone(),
            Self::ServerError { message, .. } => message.clone(),
            Self::Serialization(_) | Self::Configuration(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}
