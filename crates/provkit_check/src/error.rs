//! Error types for the validation pipeline.
//!
//! Only fatal pipeline conditions are errors. Connectivity findings are
//! advisory by design and live in the run's observations instead.

use thiserror::Error;

/// Result type alias for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Fatal conditions that halt the validation pipeline.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("no outputs: {0}")]
    NoOutputs(String),

    #[error("missing resources: {}", .0.join(", "))]
    MissingResources(Vec<String>),
}
