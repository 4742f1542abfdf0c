//! Error types for the Tallyard core library.

/// Errors that can occur while preparing or scoring submissions.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Submitted form data is not the expected pair of parallel sequences.
    #[error("invalid input format: {message}")]
    InvalidInput {
        /// What was wrong with the submission
        message: String,
    },
}

/// Convenience `Result` type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}
