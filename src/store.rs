//! Errors shared by the persistence layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

const UNIQUE_VIOLATION: &str = "23505";

/// Maps Postgres unique violations to [`StoreError::Conflict`].
pub(crate) fn classify(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_error.constraint().unwrap_or("unique constraint");
            return StoreError::Conflict(constraint.to_string());
        }
    }
    StoreError::Database(error)
}
