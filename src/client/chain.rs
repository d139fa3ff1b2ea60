//! # Chain
//!
//! Interfaces of the root chain and the child chain, as consumed by the client

/// An error raised by a chain, opaque to the client
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result returned by a chain call
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Options used to scope a root chain transactor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactOptions {
    /// Account issuing the transactions
    pub from: String,
}

impl TransactOptions {
    pub fn new(from: impl ToString) -> Self {
        Self {
            from: from.to_string(),
        }
    }
}

/// The root chain contract
pub trait RootChain {
    type Transactor: Transactor;

    /// Get a transactor sending transactions with `options`
    fn transact(&self, options: TransactOptions) -> Self::Transactor;
}

/// Sends transactions to the root chain contract
pub trait Transactor {
    /// Deposit `amount` of `currency`
    fn deposit(&self, currency: &str, amount: u64) -> CollaboratorResult<()>;
}

/// The child chain service.
///
/// Records are exchanged as hex encoded canonical bytes
pub trait ChildChain {
    /// Submit the signature of the current block
    fn submit_block(&self, signature: &str) -> CollaboratorResult<()>;

    /// Send a signed transaction
    fn send_transaction(&self, transaction: &str) -> CollaboratorResult<()>;

    /// Get the block currently being assembled
    fn get_current_block(&self) -> CollaboratorResult<String>;

    /// Get the block with number `number`
    fn get_block(&self, number: u64) -> CollaboratorResult<String>;
}
