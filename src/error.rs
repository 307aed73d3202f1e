//! Error types for directory operations.
//!
//! Transport failures are kept apart from every other failure because the
//! service translates only [`TransportError`] into a
//! [`ResultEnvelope`](crate::response::ResultEnvelope); everything else is
//! returned to the caller unchanged.

use crate::response::StatusCode;

/// A non-success response from the directory API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Transport error ({status}): {message}")]
pub struct TransportError {
    /// HTTP status returned by the directory
    pub status: StatusCode,
    /// Response body, pretty-printed when it was JSON
    pub message: String,
}

impl TransportError {
    /// Create a transport error from a status and response body.
    pub fn new(status: impl Into<StatusCode>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }
}

/// Main error type for directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The directory answered with a non-2xx status
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The extensions application or its schema could not be resolved
    #[error("Schema resolution failed: {message}")]
    SchemaResolution {
        message: String,
        /// Status of the failed directory lookup, when there was one
        status: Option<StatusCode>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Access token could not be acquired
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The request never produced an HTTP response
    #[error("Connection error: {message}")]
    Connection { message: String },
}

impl DirectoryError {
    /// Create a schema resolution error
    pub fn schema_resolution(message: impl Into<String>) -> Self {
        Self::SchemaResolution {
            message: message.into(),
            status: None,
        }
    }

    /// Create a schema resolution error caused by a rejected directory lookup
    pub fn schema_resolution_with_status(
        message: impl Into<String>,
        status: impl Into<StatusCode>,
    ) -> Self {
        Self::SchemaResolution {
            message: message.into(),
            status: Some(status.into()),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Directory status behind this error, if it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(e) => Some(e.status),
            Self::SchemaResolution { status, .. } => *status,
            _ => None,
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
