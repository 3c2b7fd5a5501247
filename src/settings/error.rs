//! Error types for the settings layer

use thiserror::Error;

use super::model::{ConfigField, Provider};

/// Errors that can end a save attempt
#[derive(Debug, Error)]
pub enum SaveError {
    /// Required fields are missing for the selected provider; no I/O was performed
    #[error("Provided configuration is not valid")]
    InvalidConfiguration {
        provider: Option<Provider>,
        missing: Vec<ConfigField>,
    },

    /// The server-side store rejected or never received the configuration
    #[error("{0}")]
    RemotePersistFailure(#[from] RemoteStoreError),

    /// The remote write succeeded but the in-process state could not be updated
    #[error("Configuration was saved remotely but local state could not be updated: {0}")]
    LocalCommitFailure(#[from] StateStoreError),
}

/// Errors raised by a [`RemoteStore`](super::store::RemoteStore)
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    /// The server answered with a non-success status
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// The request never completed
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RemoteStoreError {
    fn from(err: serde_json::Error) -> Self {
        RemoteStoreError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for RemoteStoreError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RemoteStoreError::Http {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None if err.is_decode() => RemoteStoreError::Serialization(err.to_string()),
            None => RemoteStoreError::Transport(err.to_string()),
        }
    }
}

/// Errors raised by a [`LocalStateStore`](super::store::LocalStateStore)
#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("state store lock poisoned")]
    Poisoned,
}

/// A field identifier that does not name any configuration field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown configuration field: {0}")]
pub struct UnknownFieldError(pub String);
