//! Transaction builder
//!
//! Used to SAFELY create signed transactions: nothing is signed until both the owner
//! address and the key have been normalized

use super::Transaction;
use crate::codec::Encoder;
use crate::signer::{Signer, SignerResult};

/// A safe builder to create signed transactions
pub struct TransactionBuilder<'a> {
    /// Block where the coin was last transferred
    prev_block: u64,
    /// Coin to transfer
    uid: u64,
    /// Coin denomination
    amount: u64,
    /// Recipient address, not normalized yet
    new_owner: &'a [u8],
}

impl<'a> TransactionBuilder<'a> {
    /// Create a new transaction builder for coin `uid`
    pub fn new(prev_block: u64, uid: u64) -> Self {
        Self {
            prev_block,
            uid,
            amount: 0,
            new_owner: &[],
        }
    }

    /// Set transaction amount
    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    /// Set the recipient
    pub fn new_owner(mut self, new_owner: &'a [u8]) -> Self {
        self.new_owner = new_owner;
        self
    }

    /// Normalize the recipient and `key`, then build the transaction and sign it
    pub fn sign<S>(self, signer: &S, key: &[u8]) -> SignerResult<Transaction>
    where
        S: Signer + ?Sized,
    {
        let new_owner = signer.normalize_address(self.new_owner)?;
        let key = signer.normalize_key(key)?;
        let mut transaction = Transaction::new(self.prev_block, self.uid, self.amount, new_owner);
        transaction.sign(signer, &key)?;
        debug!(
            "signed transaction for coin {} (prev block {}) to {}",
            self.uid, self.prev_block, new_owner
        );
        Ok(transaction)
    }

    /// Finish builder: sign the transaction and return its wire encoding
    pub fn finish<S, E>(self, signer: &S, encoder: &E, key: &[u8]) -> SignerResult<Vec<u8>>
    where
        S: Signer + ?Sized,
        E: Encoder,
    {
        self.sign(signer, key).map(|x| encoder.encode(&x))
    }
}
