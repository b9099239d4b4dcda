//! Error type shared by the DBOR encoder and decoder.

use dbor_buffers::BufferError;
use thiserror::Error;

/// Error type for DBOR encoding/decoding operations.
///
/// Every error aborts the current encode/decode call; no partial value is
/// ever produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DborError {
    #[error("unsupported value type for conformance level 2")]
    TypeMismatch,
    #[error("integer magnitude outside conformance level 2 range")]
    Range,
    #[error("unexpected end of input")]
    Truncated,
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,
    #[error("declared length does not match contents")]
    StructuralMismatch,
    #[error("unsupported header {0}")]
    UnsupportedHeader(u8),
    #[error("nesting too deep")]
    DepthLimit,
}

impl From<BufferError> for DborError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DborError::Truncated,
            BufferError::InvalidUtf8 => DborError::InvalidUtf8,
        }
    }
}
