//! # Memory
//!
//! Block store kept in memory

use super::BlockStore;
use crate::blockchain::{Block, DatabaseError, DatabaseResult};

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// In-memory block store. Safe to share between threads
#[derive(Debug, Default)]
pub struct MemoryBlockStore {
    blocks: RwLock<HashMap<u64, Block>>,
}

impl BlockStore for MemoryBlockStore {
    fn save_block(&self, block: Block, number: u64) -> DatabaseResult<()> {
        let mut blocks = self.blocks.write().unwrap_or_else(PoisonError::into_inner);
        match blocks.entry(number) {
            Entry::Occupied(_) => {
                warn!("refusing to overwrite block {}", number);
                Err(DatabaseError::BlockAlreadyExists(number))
            }
            Entry::Vacant(entry) => {
                info!("inserting block {}", number);
                entry.insert(block);
                Ok(())
            }
        }
    }

    fn get_block(&self, number: u64) -> DatabaseResult<Option<Block>> {
        debug!("getting block {}", number);
        let blocks = self.blocks.read().unwrap_or_else(PoisonError::into_inner);
        Ok(blocks.get(&number).cloned())
    }
}
