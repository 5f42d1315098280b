//! Errors raised while building a game configuration.

use thiserror::Error;

/// Errors that can occur when building a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Storage key is empty. Call .storage_key(key) with a non-empty key")]
    EmptyStorageKey,

    #[error("Storage key '{0}' must not contain path separators or '..'")]
    InvalidStorageKey(String),

    #[error("No increments defined. Add at least one increment")]
    NoIncrements,

    #[error("Increments must be positive")]
    ZeroIncrement,

    #[error("Score limit must be positive")]
    ZeroMaxScore,
}
