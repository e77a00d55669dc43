//! Error types for the request module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for request operations.
pub type RequestResult<T> = Result<T, RequestError>;

/// Errors that can occur while reading, validating, or rendering a request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("vm_count must be a positive integer")]
    InvalidVmCount,

    #[error("environment must be one of [dev, staging, production], got: {0}")]
    InvalidEnvironment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
