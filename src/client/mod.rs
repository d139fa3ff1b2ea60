//! # Client
//!
//! The plasma client: deposits on the root chain, signs and submits transactions and blocks
//! to the child chain.
//!
//! The client doesn't retry, cache or persist anything; errors raised by the chains are
//! returned to the caller as they are.

mod chain;
mod errors;

pub use chain::{
    ChildChain, CollaboratorError, CollaboratorResult, RootChain, TransactOptions, Transactor,
};
pub use errors::{ClientError, ClientResult};

use crate::blockchain::{Block, TransactionBuilder};
use crate::codec::{Encoder, RlpEncoder};
use crate::signer::{Secp256k1Signer, Signer};

/// Plasma client
pub struct Client<R, C, S = Secp256k1Signer, E = RlpEncoder> {
    root_chain: R,
    child_chain: C,
    signer: S,
    encoder: E,
}

impl<R, C> Client<R, C>
where
    R: RootChain,
    C: ChildChain,
{
    /// Instantiate a new `Client` with the secp256k1 signer and the rlp encoder
    pub fn new(root_chain: R, child_chain: C) -> Self {
        Self::with_capabilities(root_chain, child_chain, Secp256k1Signer::new(), RlpEncoder)
    }
}

impl<R, C, S, E> Client<R, C, S, E>
where
    R: RootChain,
    C: ChildChain,
    S: Signer,
    E: Encoder,
{
    /// Instantiate a new `Client` using the provided signer and encoder
    pub fn with_capabilities(root_chain: R, child_chain: C, signer: S, encoder: E) -> Self {
        Self {
            root_chain,
            child_chain,
            signer,
            encoder,
        }
    }

    pub fn root_chain(&self) -> &R {
        &self.root_chain
    }

    pub fn child_chain(&self) -> &C {
        &self.child_chain
    }

    /// Deposit `amount` of `currency` on the root chain on behalf of `depositor`
    pub fn deposit(&self, amount: u64, depositor: &str, currency: &str) -> ClientResult<()> {
        debug!("depositing {} {} from {}", amount, currency, depositor);
        self.root_chain
            .transact(TransactOptions::new(depositor))
            .deposit(currency, amount)
            .map_err(ClientError::RootChain)
    }

    /// Sign the hash of the current block with `key` and submit the signature
    pub fn submit_block(&self, key: impl AsRef<[u8]>) -> ClientResult<()> {
        let block = self.get_current_block()?;
        let key = self.signer.normalize_key(key.as_ref())?;
        let signature = self.signer.sign(&block.hash(), &key)?;
        info!("submitting block {}", block.number());
        self.child_chain
            .submit_block(&signature.to_hex())
            .map_err(ClientError::ChildChain)
    }

    /// Transfer coin `uid` to `new_owner`, signing the transaction with `key`
    pub fn send_transaction(
        &self,
        prev_block: u64,
        uid: u64,
        amount: u64,
        new_owner: impl AsRef<[u8]>,
        key: impl AsRef<[u8]>,
    ) -> ClientResult<()> {
        let transaction = TransactionBuilder::new(prev_block, uid)
            .amount(amount)
            .new_owner(new_owner.as_ref())
            .finish(&self.signer, &self.encoder, key.as_ref())?;
        info!("sending transaction for coin {}", uid);
        self.child_chain
            .send_transaction(&hex::encode(transaction))
            .map_err(ClientError::ChildChain)
    }

    /// Get the block currently assembled by the child chain
    pub fn get_current_block(&self) -> ClientResult<Block> {
        debug!("getting current block");
        let block = self
            .child_chain
            .get_current_block()
            .map_err(ClientError::ChildChain)?;
        self.decode_block(&block)
    }

    /// Get block `number` from the child chain
    pub fn get_block(&self, number: u64) -> ClientResult<Block> {
        debug!("getting block {}", number);
        let block = self
            .child_chain
            .get_block(number)
            .map_err(ClientError::ChildChain)?;
        self.decode_block(&block)
    }

    fn decode_block(&self, block: &str) -> ClientResult<Block> {
        let block = hex::decode(block.strip_prefix("0x").unwrap_or(block))?;
        self.encoder.decode(&block).map_err(ClientError::from)
    }
}
