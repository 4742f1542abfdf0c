//! Error types for tallyard-store.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the persistence gateway.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Database error from the sqlx driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend-level failure outside the driver (used by non-SQL backends).
    #[error("storage backend error: {message}")]
    Backend {
        /// What the backend reported
        message: String,
    },
}

impl Error {
    /// Creates a new backend error.
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Error::Backend {
            message: message.into(),
        }
    }
}
