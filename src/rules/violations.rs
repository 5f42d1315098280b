//! Rule violations raised against score mutations.

use thiserror::Error;

/// Reasons a score mutation was refused.
///
/// Violations are never fatal: the store logs them, leaves the state
/// untouched and reports them back in the mutation outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreViolation {
    #[error("Player {index} does not exist")]
    UnknownPlayer { index: usize },

    #[error("Increment must be positive")]
    ZeroPoints,

    #[error("Score limit ({limit}) exceeded (attempted: {attempted})")]
    ScoreLimitExceeded { limit: u32, attempted: u64 },

    #[error("Player {index} has no points to undo")]
    NothingToUndo { index: usize },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
