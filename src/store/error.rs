/// Storage error types
///
/// Every store operation reports failures through [`StoreError`] so handlers
/// can translate them without inspecting driver internals.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The referenced record does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// A uniqueness constraint rejected the write; the transaction was rolled back
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other driver failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// True when the driver reports a UNIQUE or PRIMARY KEY violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// True when the driver reports a FOREIGN KEY violation
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
