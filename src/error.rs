//! Error types for the Marvel API client.
//!
//! Every operation returns these as values. Nothing is retried internally, so
//! a caller walking many pages can inspect a failure and decide what to do.

use crate::resource::ResourceKind;
use thiserror::Error;

/// Result type for Marvel API operations.
pub type Result<T> = std::result::Result<T, MarvelError>;

/// Errors that can occur when talking to the Marvel API.
#[derive(Error, Debug)]
pub enum MarvelError {
    /// The request never produced a response (connection, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status of 400 or above.
    #[error("API error ({status_code}): {body}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body, unparsed.
        body: String,
    },

    /// The response body did not match the expected envelope shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A resource or collection URI could not be mapped onto an API path.
    #[error("invalid resource URI: {0}")]
    InvalidUri(String),

    /// Link-following was attempted on a value without a URI.
    #[error("no URI to follow for {0}")]
    MissingUri(ResourceKind),

    /// A date string did not match the API date layout.
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        /// The raw date string.
        value: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },

    /// Client configuration is incomplete.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MarvelError {
    /// Returns true if repeating the same request later may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarvelError::Transport(_) => true,
            MarvelError::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            _ => false,
        }
    }

    /// Returns true if the API rejected the credentials or signature.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            MarvelError::Api { status_code: 401, .. } | MarvelError::Api { status_code: 403, .. }
        )
    }

    /// Returns the HTTP status code if the API produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MarvelError::Api { status_code, .. } => Some(*status_code),
            MarvelError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
