//! # Blockchain
//!
//! Blockchain module exposes the child chain records (transactions and blocks) and the
//! block store

// -- modules
mod block;
pub mod database;
mod errors;
mod merkle;

pub use block::{Block, Transaction, TransactionBuilder};
pub use database::{open_block_store, BlockStore, LevelDbBlockStore, MemoryBlockStore};
pub use errors::{DatabaseError, DatabaseResult};
