//! # Signer
//!
//! This module exposes the key and address normalization and the signing of message digests

mod address;
mod errors;
mod key;
mod signature;

pub use address::{Address, ADDRESS_SIZE};
pub use errors::{SignerError, SignerResult};
pub use key::PrivateKey;
pub use secp256k1::constants::SECRET_KEY_SIZE;
pub use signature::{Signature, SIGNATURE_SIZE};

use crate::hash::Digest;

use secp256k1::{All, Message, Secp256k1};

/// Signing capability, consumed by the transaction builder and the client
pub trait Signer {
    /// Turn externally supplied key material into a [`PrivateKey`]
    fn normalize_key(&self, raw: &[u8]) -> SignerResult<PrivateKey>;

    /// Turn an externally supplied address into an [`Address`]
    fn normalize_address(&self, raw: &[u8]) -> SignerResult<Address>;

    /// Sign `digest` with `key`
    fn sign(&self, digest: &Digest, key: &PrivateKey) -> SignerResult<Signature>;
}

/// [`Signer`] producing recoverable secp256k1 ECDSA signatures.
///
/// Nonces are derived with RFC6979, so signing the same digest with the same key always
/// yields the same signature
pub struct Secp256k1Signer {
    secp: Secp256k1<All>,
}

impl Default for Secp256k1Signer {
    fn default() -> Self {
        Self::new()
    }
}

impl Secp256k1Signer {
    /// Instantiate a new `Secp256k1Signer`
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }
}

impl Signer for Secp256k1Signer {
    fn normalize_key(&self, raw: &[u8]) -> SignerResult<PrivateKey> {
        normalize_key(raw)
    }

    fn normalize_address(&self, raw: &[u8]) -> SignerResult<Address> {
        normalize_address(raw)
    }

    fn sign(&self, digest: &Digest, key: &PrivateKey) -> SignerResult<Signature> {
        let message = Message::from_slice(digest)?;
        let signature = self
            .secp
            .sign_ecdsa_recoverable(&message, &key.secret_key()?);
        Ok(Signature::from_recoverable(&signature))
    }
}

/// Normalize a private key.
///
/// `raw` is the hex representation of the 32 key bytes, optionally `0x` prefixed.
/// Raw key bytes are not accepted
pub fn normalize_key(raw: &[u8]) -> SignerResult<PrivateKey> {
    let bytes = hex_text::<SECRET_KEY_SIZE>(raw).ok_or_else(|| {
        SignerError::InvalidKey(format!("expected {} hex encoded bytes", SECRET_KEY_SIZE))
    })?;
    PrivateKey::try_from_bytes(bytes)
        .map_err(|_| SignerError::InvalidKey(String::from("not a valid secp256k1 secret")))
}

/// Normalize an address.
///
/// `raw` is the hex representation of the 20 address bytes, optionally `0x` prefixed.
/// An [`Address`] built from raw bytes is obtained with `Address::from([u8; 20])`
pub fn normalize_address(raw: &[u8]) -> SignerResult<Address> {
    hex_text::<ADDRESS_SIZE>(raw)
        .map(Address::from)
        .ok_or_else(|| {
            SignerError::InvalidAddress(format!("expected {} hex encoded bytes", ADDRESS_SIZE))
        })
}

/// Interpret `raw` as utf8 text encoding exactly `N` bytes in hex
fn hex_text<const N: usize>(raw: &[u8]) -> Option<[u8; N]> {
    std::str::from_utf8(raw).ok().and_then(from_hex::<N>)
}

/// Parse exactly `N` hex encoded bytes, optionally `0x` prefixed
pub(crate) fn from_hex<const N: usize>(text: &str) -> Option<[u8; N]> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let mut bytes = [0; N];
    hex::decode_to_slice(text, &mut bytes).ok()?;
    Some(bytes)
}
