//! # Transaction
//!
//! the transfer of a coin to a new owner

mod builder;

pub use builder::TransactionBuilder;

use crate::codec::{
    self, decode_array, expect_fields, Decodable, Encodable, Rlp, RlpResult, RlpStream,
};
use crate::hash::{sha256, Digest};
use crate::signer::{Address, PrivateKey, Signature, Signer, SignerError, SignerResult};

use merkle::Hashable;
use ring::digest::Context;

/// The transaction, moves the coin `uid` to `new_owner`
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Transaction {
    /// Block where the coin was last transferred or deposited
    prev_block: u64,
    /// Coin identifier
    uid: u64,
    /// Coin denomination
    amount: u64,
    /// Address of the recipient
    new_owner: Address,
    /// Signature of the current owner over the transaction hash
    signature: Option<Signature>,
}

impl Transaction {
    /// Instantiates a new unsigned `Transaction`
    pub fn new(prev_block: u64, uid: u64, amount: u64, new_owner: Address) -> Self {
        Self {
            prev_block,
            uid,
            amount,
            new_owner,
            signature: None,
        }
    }

    pub fn prev_block(&self) -> u64 {
        self.prev_block
    }

    pub fn uid(&self) -> u64 {
        self.uid
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn new_owner(&self) -> &Address {
        &self.new_owner
    }

    /// Get the transaction signature, if signed
    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Calculate the digest of the transaction; the signature doesn't take part in it
    pub fn hash(&self) -> Digest {
        sha256(&codec::encode(&Unsigned(self)))
    }

    /// Sign transaction with `key`. A transaction can be signed only once
    pub fn sign<S>(&mut self, signer: &S, key: &PrivateKey) -> SignerResult<()>
    where
        S: Signer + ?Sized,
    {
        if self.signature.is_some() {
            return Err(SignerError::AlreadySigned);
        }
        self.signature = Some(signer.sign(&self.hash(), key)?);
        Ok(())
    }

    /// Recover the address of the owner who signed the transaction
    pub fn sender(&self) -> SignerResult<Option<Address>> {
        self.signature
            .as_ref()
            .map(|x| x.recover(&self.hash()))
            .transpose()
    }
}

/// Unsigned view over a transaction, used to calculate its digest
struct Unsigned<'a>(&'a Transaction);

impl Unsigned<'_> {
    fn append_fields(&self, stream: &mut RlpStream) {
        stream
            .append(&self.0.prev_block)
            .append(&self.0.uid)
            .append(&self.0.amount)
            .append(&self.0.new_owner.as_bytes().to_vec());
    }
}

impl Encodable for Unsigned<'_> {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.begin_list(4);
        self.append_fields(stream);
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, stream: &mut RlpStream) {
        stream.begin_list(5);
        Unsigned(self).append_fields(stream);
        self.signature.rlp_append(stream);
    }
}

impl Decodable for Transaction {
    fn rlp_decode(rlp: &Rlp) -> RlpResult<Self> {
        let fields = expect_fields(rlp, 5)?;
        Ok(Self {
            prev_block: u64::rlp_decode(&fields[0])?,
            uid: u64::rlp_decode(&fields[1])?,
            amount: u64::rlp_decode(&fields[2])?,
            new_owner: Address::from(decode_array(&fields[3], "new_owner")?),
            signature: Option::<Signature>::rlp_decode(&fields[4])?,
        })
    }
}

impl Hashable for Transaction {
    fn update_context(&self, context: &mut Context) {
        context.update(&codec::encode(self));
    }
}
