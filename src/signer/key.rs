//! # Key
//!
//! Private key used to sign transactions and blocks

use super::{errors::SignerResult, Address};

use secp256k1::{constants::SECRET_KEY_SIZE, rand::rngs::OsRng, PublicKey, Secp256k1, SecretKey};
use std::fmt;

/// A normalized private key (DON'T SHARE WITH ANYBODY)
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; SECRET_KEY_SIZE]);

impl PrivateKey {
    /// Generate a new random private key
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, _) = secp.generate_keypair(&mut OsRng);
        Self(secret_key.secret_bytes())
    }

    /// Instantiate a key from raw bytes, checking it is a valid secp256k1 secret
    pub(super) fn try_from_bytes(bytes: [u8; SECRET_KEY_SIZE]) -> SignerResult<Self> {
        SecretKey::from_slice(&bytes)?;
        Ok(Self(bytes))
    }

    /// Get key bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.0
    }

    /// Get key as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(super) fn secret_key(&self) -> SignerResult<SecretKey> {
        SecretKey::from_slice(&self.0).map_err(Into::into)
    }

    /// Get the public key for this private key
    pub fn public_key(&self) -> SignerResult<PublicKey> {
        let secp = Secp256k1::signing_only();
        Ok(PublicKey::from_secret_key(&secp, &self.secret_key()?))
    }

    /// Get the address owned by this key
    pub fn address(&self) -> SignerResult<Address> {
        self.public_key().map(|x| Address::from_public_key(&x))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}
