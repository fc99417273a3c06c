//! Error types for haven-core

use thiserror::Error;

use crate::api::ApiError;
use crate::session::SessionError;

/// Result type alias using haven-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in haven-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Backend request failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session slot could not be read or written
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Client configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
