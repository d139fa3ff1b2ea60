//! # Hash
//!
//! Digest helpers shared by the signer and the blockchain types

use ring::digest::{digest, SHA256};

/// Size of a message digest
pub const DIGEST_SIZE: usize = 32;

/// A SHA256 message digest
pub type Digest = [u8; DIGEST_SIZE];

/// Calculate the SHA256 of `data`
pub fn sha256(data: &[u8]) -> Digest {
    let mut out = [0; DIGEST_SIZE];
    out.copy_from_slice(digest(&SHA256, data).as_ref());
    out
}
