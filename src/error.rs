//! Error types for the dummy AI library
//!
//! The simulated transport failure is reported as a status code, not as one
//! of these errors; `DummyError` covers misuse of the Rust API and the
//! configuration layer.

use thiserror::Error;

/// Result type alias for library operations
pub type DummyResult<T> = Result<T, DummyError>;

#[derive(Error, Debug)]
pub enum DummyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        param: Option<String>,
    },

    #[error("Destination buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DummyError {
    pub fn error_type(&self) -> &str {
        match self {
            Self::Config(_) => "configuration_error",
            Self::Validation { .. } => "invalid_request_error",
            Self::BufferTooSmall { .. } => "buffer_error",
            Self::Io(_) => "io_error",
        }
    }
}

impl From<serde_json::Error> for DummyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            message: err.to_string(),
            param: None,
        }
    }
}
