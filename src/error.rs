//! Error types for the pgen console.
//!
//! Only transport and environment problems are errors. A backend that answers
//! without the success marker is a normal outcome, not an `Err`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interaction failed: {0}")]
    Interaction(String),
}

impl From<config::ConfigError> for ConsoleError {
    fn from(err: config::ConfigError) -> Self {
        ConsoleError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for ConsoleError {
    fn from(err: dialoguer::Error) -> Self {
        ConsoleError::Interaction(err.to_string())
    }
}
