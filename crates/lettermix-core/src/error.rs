//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A command was rejected by board rules.
    #[error("validation error: {0}")]
    Validation(String),

    /// A shared resource could not be used.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
