//! Error types for the backend module.

use thiserror::Error;

/// Result type alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors that can occur while querying the backend.
///
/// A failed invocation and unparsable output are deliberately collapsed into
/// one condition: at this layer malformed output is indistinguishable from
/// absence, and the caller must treat both as fatal.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend unavailable ({command}): {detail}")]
    Unavailable { command: String, detail: String },
}

impl BackendError {
    pub fn unavailable(command: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Unavailable {
            command: command.into(),
            detail: detail.into(),
        }
    }
}
