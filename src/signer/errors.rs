//! # Errors
//!
//! Signer error types

use secp256k1::Error as Secp256k1Error;
use thiserror::Error;

/// Result returned by the signer
pub type SignerResult<T> = Result<T, SignerError>;

/// Describes a signer error.
///
/// Error messages never carry the rejected key material
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("record has already been signed")]
    AlreadySigned,
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("secp256k1 error: {0}")]
    Secp256k1(Secp256k1Error),
}

impl From<Secp256k1Error> for SignerError {
    fn from(e: Secp256k1Error) -> Self {
        Self::Secp256k1(e)
    }
}
