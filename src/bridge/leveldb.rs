//! # LevelDB
//!
//! Insert-only key value store on top of leveldb. Every write is synced to disk before
//! returning, and a value can't be replaced once written.

pub use db_key::Key;
use leveldb::database::Database;
use leveldb::error::Error as DbError;
use leveldb::kv::KV;
use leveldb::options::{Options, ReadOptions, WriteOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

pub type LevelDbResult<T> = Result<T, LevelDbError>;

#[derive(Debug, Error)]
pub enum LevelDbError {
    #[error("could not open leveldb at {path}: {source}")]
    Open { path: PathBuf, source: DbError },
    #[error("leveldb read failed: {0}")]
    Read(DbError),
    #[error("leveldb write failed: {0}")]
    Write(DbError),
}

/// Handle to an insert-only leveldb
pub struct LevelDbBridge<K: Key> {
    database: Database<K>,
    /// serializes the lookup and the write of `insert`
    insert_lock: Mutex<()>,
}

impl<K> LevelDbBridge<K>
where
    K: Key + Copy,
{
    /// Open the database at `path`, creating it if missing
    pub fn open(path: &Path) -> LevelDbResult<Self> {
        let mut options = Options::new();
        options.create_if_missing = true;
        let database = Database::open(path, options).map_err(|source| LevelDbError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            database,
            insert_lock: Mutex::new(()),
        })
    }

    /// Write `value` at `key` unless `key` is already taken.
    /// Returns whether the value has been written
    pub fn insert(&self, key: K, value: &[u8]) -> LevelDbResult<bool> {
        let _guard = self
            .insert_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.get(key)?.is_some() {
            return Ok(false);
        }
        let mut options = WriteOptions::new();
        options.sync = true;
        self.database
            .put(options, key, value)
            .map_err(LevelDbError::Write)?;
        Ok(true)
    }

    pub fn get(&self, key: K) -> LevelDbResult<Option<Vec<u8>>> {
        self.database
            .get(ReadOptions::new(), key)
            .map_err(LevelDbError::Read)
    }
}
