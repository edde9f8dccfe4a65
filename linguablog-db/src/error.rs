//! Structured error type for the query layer.
//!
//! Database errors bubble to the caller unmodified; a lookup that
//! matches nothing is `None` or an empty `Vec`, never an error.

use thiserror::Error;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result type alias for query-layer operations
pub type Result<T> = std::result::Result<T, DbError>;
