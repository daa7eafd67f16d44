//! Error types for the byte source adapter.
//!
//! Distinct from the tokenizer's in-band `ERROR` tokens: these are failures
//! in the adapter itself (the thing sitting between the tokenizer and
//! whatever is actually producing bytes), surfaced as `Result::Err`.

use thiserror::Error;

/// Failure mode for a [`crate::ByteSource`] implementation.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed; `message` carries its description.
    #[error("byte source read failed: {0}")]
    Io(String),

    /// `reset()` was called without a preceding `mark()`, or past the end
    /// of the bounded rewind buffer.
    #[error("reset requested {requested} bytes but only {available} are marked")]
    RewindExhausted { requested: usize, available: usize },
}

/// Result type alias for [`crate::ByteSource`] operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
