//! # Errors
//!
//! This module defines the errors for the block store

use crate::bridge::leveldb::LevelDbError;
use crate::codec::RlpError;

use thiserror::Error;

/// Block store result type
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("block {0} already exists")]
    BlockAlreadyExists(u64),
    #[error("database error: {0}")]
    Database(LevelDbError),
    #[error("block in database has a bad value: {0}")]
    Malformed(RlpError),
}

impl From<LevelDbError> for DatabaseError {
    fn from(e: LevelDbError) -> Self {
        Self::Database(e)
    }
}

impl From<RlpError> for DatabaseError {
    fn from(e: RlpError) -> Self {
        Self::Malformed(e)
    }
}
