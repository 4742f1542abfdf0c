//! Error types for the spreadsheet gateway.

use thiserror::Error;

/// Result type alias for spreadsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while appending to the spreadsheet.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The service-account key file is missing or malformed.
    #[error("credentials error: {message}")]
    Credentials {
        /// What went wrong loading or parsing the key
        message: String,
    },

    /// Signing the service-account assertion failed.
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Transport-level failure talking to Google.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Google replied with a non-success status.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code returned
        status: u16,
        /// Response body, for the log
        body: String,
    },
}

impl Error {
    /// Creates a new credentials error.
    pub fn credentials<S: Into<String>>(message: S) -> Self {
        Error::Credentials {
            message: message.into(),
        }
    }

    /// Creates a new API error.
    pub fn api<S: Into<String>>(status: u16, body: S) -> Self {
        Error::Api {
            status,
            body: body.into(),
        }
    }
}
