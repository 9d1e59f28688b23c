//! Error types raised by build repositories.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("build repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid build name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("could not determine a per-user data directory")]
    NoDataDirectory,
}

pub type Result<T> = std::result::Result<T, StoreError>;
