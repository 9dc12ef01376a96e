//! Error types for the New Relic SCIM client.
//!
//! Protocol-level SCIM errors returned inside a 2xx body are not represented
//! here; they surface as a populated error shape in [`crate::ScimReply`].

use thiserror::Error;

/// Result alias used by every client operation.
pub type ScimClientResult<T> = Result<T, ScimClientError>;

#[derive(Debug, Error)]
pub enum ScimClientError {
    /// Network failure, timeout or TLS error while talking to the endpoint.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a status outside 200..=299.
    #[error("error body: {body}\nstatus Code: {status}")]
    Status { status: u16, body: String },

    /// The outgoing body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Missing required environment variable: {var}")]
    ConfigMissing { var: String },

    #[error("Invalid value for {var}: {reason}")]
    ConfigInvalid { var: String, reason: String },
}

impl ScimClientError {
    /// HTTP status of a non-2xx response, if that is what this error is.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether the failure happened before any response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
