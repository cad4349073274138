//! Centralized error types for KGB.

use serde::Serialize;
use thiserror::Error;

/// Why the graph store refused to complete a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreErrorKind {
    /// The store received the statement and rejected it.
    Rejected,
    /// The store could not be reached or dropped the connection.
    Unavailable,
}

impl std::fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected => write!(f, "rejected"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Main error type for KGB operations.
#[derive(Error, Debug)]
pub enum KgbError {
    #[error("Input text is empty")]
    EmptyInput,

    #[error("Intent routing failed: {0}")]
    Router(String),

    #[error("Model call failed: {0}")]
    Model(String),

    #[error("Graph store {kind}: {message}")]
    Store {
        kind: StoreErrorKind,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for KGB operations.
pub type KgbResult<T> = Result<T, KgbError>;

impl KgbError {
    /// Create a model error.
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a store error for a statement the store refused.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Store {
            kind: StoreErrorKind::Rejected,
            message: msg.into(),
        }
    }

    /// Create a store error for a connectivity failure.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Store {
            kind: StoreErrorKind::Unavailable,
            message: msg.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}
