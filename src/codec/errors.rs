//! # Errors
//!
//! Errors raised while decoding canonical data

use rlp::DecoderError;
use thiserror::Error;

/// Result returned by the decoder
pub type RlpResult<T> = Result<T, RlpError>;

/// Describes malformed data: bytes which don't conform to the requested schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RlpError {
    #[error("rlp error: {0}")]
    Decoder(DecoderError),
    #[error("{0} trailing bytes after item")]
    TrailingBytes(usize),
    #[error("expected a list, found a byte string")]
    ExpectedList,
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("bad length for {field}: expected {expected} bytes, found {found}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

impl From<DecoderError> for RlpError {
    fn from(e: DecoderError) -> Self {
        Self::Decoder(e)
    }
}
