//! Error types for the kanban engine
//!
//! Board mutations and drag transitions are total: an unknown id or a
//! malformed drag event is a no-op, never an error. Errors only surface from
//! the storage and configuration layers.

use thiserror::Error;

/// Result type for kanban storage operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur while reading or writing board state
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Storage key would escape the storage root
    #[error("invalid storage key: {key}")]
    InvalidKey { key: String },

    /// Lock is held by another process
    #[error("lock busy - another write in progress")]
    LockBusy,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}
