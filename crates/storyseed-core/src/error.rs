//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in domain logic or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A custom entry slot does not exist (it was deleted or never allocated).
    #[error("custom slot not found: {0}")]
    SlotNotFound(u64),

    /// An infrastructure error (audio device, upstream generator, I/O).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
