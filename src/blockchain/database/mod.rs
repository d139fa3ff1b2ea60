//! # Database
//!
//! Append-only stores for the blocks of the child chain.
//!
//! A block number is written at most once: saving a block under an occupied number fails
//! and leaves the stored block untouched.

mod key;
mod level;
mod memory;

pub use level::LevelDbBlockStore;
pub use memory::MemoryBlockStore;

use super::errors::DatabaseResult;
use super::Block;
use crate::config::Config;

/// A store mapping block numbers to blocks
pub trait BlockStore {
    /// Save `block` under `number`.
    ///
    /// Fails with `BlockAlreadyExists` if `number` is already occupied
    fn save_block(&self, block: Block, number: u64) -> DatabaseResult<()>;

    /// Get block saved under `number`; `None` if it has never been saved
    fn get_block(&self, number: u64) -> DatabaseResult<Option<Block>>;
}

/// Open the block store described by `config`: leveldb if a database directory is set,
/// memory otherwise
pub fn open_block_store(config: &Config) -> DatabaseResult<Box<dyn BlockStore>> {
    match config.database_dir() {
        Some(path) => {
            info!("opening leveldb block store at {}", path.display());
            Ok(Box::new(LevelDbBlockStore::try_from(path)?))
        }
        None => {
            info!("using in-memory block store");
            Ok(Box::new(MemoryBlockStore::default()))
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::blockchain::DatabaseError;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn should_behave_as_append_only_store(store: &dyn BlockStore) {
        assert!(store.get_block(1).unwrap().is_none());
        let block = Block::new(1, vec![]);
        assert!(store.save_block(block.clone(), 1).is_ok());
        assert_eq!(store.get_block(1).unwrap().unwrap(), block);
        assert!(matches!(
            store.save_block(Block::new(2, vec![]), 1),
            Err(DatabaseError::BlockAlreadyExists(1))
        ));
        assert_eq!(store.get_block(1).unwrap().unwrap(), block);
        assert!(store.get_block(2).unwrap().is_none());
    }

    #[test]
    fn should_open_memory_store_without_database_dir() {
        let config = Config::try_from_iter(vec![]).unwrap();
        let store = open_block_store(&config).unwrap();
        should_behave_as_append_only_store(store.as_ref());
    }

    #[test]
    fn should_open_leveldb_store_with_database_dir() {
        let tempdir = TempDir::new().expect("could not create tempdir");
        let config = Config::try_from_iter(vec![(
            String::from("PLASMA_DATABASE_DIR"),
            tempdir.path().display().to_string(),
        )])
        .unwrap();
        let store = open_block_store(&config).unwrap();
        should_behave_as_append_only_store(store.as_ref());
    }
}
