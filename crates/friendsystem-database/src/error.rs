//! Storage error types.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Storage error type.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not acquire a pooled connection
    #[error("Connection error: {0}")]
    Unavailable(String),

    /// Canonical-key collision on insert
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// An expected single-row mutation affected zero rows
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),

    /// Statement timed out waiting on the database
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Any other SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, ref message) = err {
            let detail = message.clone().unwrap_or_else(|| code.to_string());
            match code.code {
                ErrorCode::ConstraintViolation => return StoreError::ConstraintViolation(detail),
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                    return StoreError::Timeout(detail)
                }
                _ => {}
            }
        }
        StoreError::Sqlite(err)
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
