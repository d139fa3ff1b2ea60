//! # Signature
//!
//! Recoverable secp256k1 signature

use super::errors::{SignerError, SignerResult};
use super::Address;
use crate::codec::{Decodable, Encodable, Rlp, RlpError, RlpResult, RlpStream};
use crate::hash::Digest;

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};
use serde::{Serialize, Serializer};
use std::fmt;

/// Size of a signature in bytes (`r || s || v`)
pub const SIGNATURE_SIZE: usize = 65;
/// Added to the recovery id to get `v`
const V_OFFSET: u8 = 27;

/// A signature over a message digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    pub(super) fn from_recoverable(signature: &RecoverableSignature) -> Self {
        let (recid, compact) = signature.serialize_compact();
        let mut bytes = [0; SIGNATURE_SIZE];
        bytes[..64].copy_from_slice(&compact);
        bytes[64] = recid.to_i32() as u8 + V_OFFSET;
        Self(bytes)
    }

    /// Get signature bytes
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Get signature as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Recover the address of the key which signed `digest`
    pub fn recover(&self, digest: &Digest) -> SignerResult<Address> {
        let recid = RecoveryId::from_i32(self.0[64] as i32 - V_OFFSET as i32)
            .map_err(|e| SignerError::InvalidSignature(e.to_string()))?;
        let signature = RecoverableSignature::from_compact(&self.0[..64], recid)
            .map_err(|e| SignerError::InvalidSignature(e.to_string()))?;
        let message = Message::from_slice(digest)?;
        let pubkey = Secp256k1::verification_only().recover_ecdsa(&message, &signature)?;
        Ok(Address::from_public_key(&pubkey))
    }

    /// Verify whether `digest` has actually been signed by the owner of `address`
    pub fn verify(&self, digest: &Digest, address: &Address) -> bool {
        matches!(self.recover(digest), Ok(signer) if &signer == address)
    }
}

impl From<[u8; SIGNATURE_SIZE]> for Signature {
    fn from(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// A missing signature is encoded as an empty string
impl Encodable for Option<Signature> {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.append(&self.map(|x| x.0.to_vec()).unwrap_or_default());
    }
}

impl Decodable for Option<Signature> {
    fn rlp_decode(rlp: &Rlp) -> RlpResult<Self> {
        let bytes: Vec<u8> = rlp.as_val()?;
        if bytes.is_empty() {
            return Ok(None);
        }
        <[u8; SIGNATURE_SIZE]>::try_from(bytes.as_slice())
            .map(|x| Some(Signature(x)))
            .map_err(|_| RlpError::InvalidLength {
                field: "signature",
                expected: SIGNATURE_SIZE,
                found: bytes.len(),
            })
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::codec;

    use pretty_assertions::assert_eq;

    #[test]
    fn should_encode_missing_signature_as_empty_string() {
        assert_eq!(codec::encode(&None::<Signature>), vec![0x80]);
        assert_eq!(codec::decode::<Option<Signature>>(&[0x80]).unwrap(), None);
    }

    #[test]
    fn should_reject_signature_with_bad_length() {
        assert!(codec::decode::<Option<Signature>>(&[0x82, 0x01, 0x02]).is_err());
        assert!(codec::decode::<Option<Signature>>(&[0xc0]).is_err());
    }

    #[test]
    fn should_fail_recovering_bad_signature() {
        let signature = Signature::from([0; SIGNATURE_SIZE]);
        assert!(signature.recover(&[0xab; 32]).is_err());
    }
}
