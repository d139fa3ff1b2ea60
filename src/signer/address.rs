//! # Address
//!
//! The address which identifies the owner of a coin

use super::errors::{SignerError, SignerResult};
use super::from_hex;
use crate::hash::sha256;

use ripemd::{Digest, Ripemd160};
use secp256k1::PublicKey;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of an address in bytes
pub const ADDRESS_SIZE: usize = 20;

/// A normalized address; corresponds to `RIPEMD160(SHA256(compressed_public_key))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Calculate the address owned by `pubkey`
    pub fn from_public_key(pubkey: &PublicKey) -> Self {
        let sha256 = sha256(&pubkey.serialize());
        let mut ripe_hasher = Ripemd160::new();
        ripe_hasher.update(sha256);
        let mut address = [0; ADDRESS_SIZE];
        address.copy_from_slice(&ripe_hasher.finalize());
        Self(address)
    }

    /// Get address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = SignerError;

    /// Parse an address from its hex representation
    fn from_str(s: &str) -> SignerResult<Self> {
        from_hex(s).map(Self).ok_or_else(|| {
            SignerError::InvalidAddress(format!("expected {} hex encoded bytes", ADDRESS_SIZE))
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
