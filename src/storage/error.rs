//! Storage error types.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing the persisted game
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The backend refused a write that would exceed its capacity
    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, quota {quota})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Key cannot be mapped onto the backend
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Underlying file I/O failed
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}
