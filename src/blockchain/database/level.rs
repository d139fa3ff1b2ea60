//! # Level
//!
//! Block store persisted on leveldb

use super::key::BlockKey;
use super::BlockStore;
use crate::blockchain::{Block, DatabaseError, DatabaseResult};
use crate::bridge::leveldb::LevelDbBridge;
use crate::codec;

use std::path::Path;

/// Block store persisted on leveldb. Blocks are stored with their canonical encoding
pub struct LevelDbBlockStore {
    database: LevelDbBridge<BlockKey>,
}

impl TryFrom<&Path> for LevelDbBlockStore {
    type Error = DatabaseError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        debug!("initializing leveldb block store");
        Ok(Self {
            database: LevelDbBridge::open(path)?,
        })
    }
}

impl BlockStore for LevelDbBlockStore {
    fn save_block(&self, block: Block, number: u64) -> DatabaseResult<()> {
        let payload = codec::encode(&block);
        if !self.database.insert(number.into(), &payload)? {
            warn!("refusing to overwrite block {}", number);
            return Err(DatabaseError::BlockAlreadyExists(number));
        }
        info!("inserted block {} ({} bytes)", number, payload.len());
        Ok(())
    }

    fn get_block(&self, number: u64) -> DatabaseResult<Option<Block>> {
        debug!("getting block {}", number);
        self.database
            .get(number.into())?
            .map(|payload| codec::decode(&payload))
            .transpose()
            .map_err(|e| {
                error!("block {} has a bad payload: {}", number, e);
                DatabaseError::from(e)
            })
    }
}
