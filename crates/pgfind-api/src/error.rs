//! Error types for the listings client.

use std::fmt;

/// Errors reported by the remote listings source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// The API key was rejected.
    Auth { message: String },
    /// The configured table does not exist.
    NotFound { resource: String },
    /// Network/connection error, including timeouts.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::NotFound { resource } => write!(f, "{} not found", resource),
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            _ => 2,
        }
    }
}

/// Failure to fetch the listing collection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source answered with an error, or could not be reached.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The response body was not a JSON array of rows.
    #[error("failed to decode listings response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::Decode(err.to_string());
        }
        Error::Api(ApiError::Network {
            message: err.to_string(),
        })
    }
}

impl Error {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) => api.exit_code(),
            Error::Decode(_) => 2,
        }
    }
}

/// Result type for listings client operations.
pub type Result<T> = std::result::Result<T, Error>;
