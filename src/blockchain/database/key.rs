//! # key
//!
//! This module implements the key for leveldb

use crate::bridge::leveldb::Key;

/// The key used for the database: the block number, big endian
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockKey(u64);

impl From<u64> for BlockKey {
    fn from(number: u64) -> Self {
        Self(number)
    }
}

impl Key for BlockKey {
    fn from_u8(key: &[u8]) -> Self {
        let mut bytes = [0; 8];
        bytes.copy_from_slice(key);
        Self(u64::from_be_bytes(bytes))
    }

    fn as_slice<T, F: Fn(&[u8]) -> T>(&self, f: F) -> T {
        f(&self.0.to_be_bytes())
    }
}
