//! # Errors
//!
//! Client error types

use super::chain::CollaboratorError;
use crate::codec::RlpError;
use crate::signer::SignerError;

use thiserror::Error;

/// Result returned by the client
pub type ClientResult<T> = Result<T, ClientError>;

/// Describes a client error
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("signer error: {0}")]
    Signer(SignerError),
    #[error("malformed data: {0}")]
    MalformedData(RlpError),
    #[error("malformed hex: {0}")]
    MalformedHex(hex::FromHexError),
    /// Raised by the root chain; passed through as is
    #[error(transparent)]
    RootChain(CollaboratorError),
    /// Raised by the child chain; passed through as is
    #[error(transparent)]
    ChildChain(CollaboratorError),
}

impl From<SignerError> for ClientError {
    fn from(e: SignerError) -> Self {
        Self::Signer(e)
    }
}

impl From<RlpError> for ClientError {
    fn from(e: RlpError) -> Self {
        Self::MalformedData(e)
    }
}

impl From<hex::FromHexError> for ClientError {
    fn from(e: hex::FromHexError) -> Self {
        Self::MalformedHex(e)
    }
}
