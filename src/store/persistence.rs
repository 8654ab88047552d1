//! Sled-backed [`FileRecordStore`].
//!
//! Records live in the `files` tree, keyed by the raw bytes of the path hash,
//! with bincode-encoded values.

use super::FileRecordStore;
use crate::error::StorageError;
use crate::types::StoredRecord;
use std::path::Path;

const FILES_TREE: &str = "files";

pub struct SledFileRecordStore {
    db: sled::Db,
    files: sled::Tree,
}

impl SledFileRecordStore {
    /// Open (or create) a store at `path`.
    pub fn new(path: &Path) -> Result<Self, StorageError> {
        std::fs::create_dir_all(path)?;
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// Wrap an already opened database.
    pub fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let files = db.open_tree(FILES_TREE)?;
        Ok(Self { db, files })
    }

    /// Throwaway store removed on drop; used by tests.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn decode(key: &[u8], value: &[u8]) -> Result<StoredRecord, StorageError> {
    let record: StoredRecord = bincode::deserialize(value)?;
    if record.path_hash.as_bytes() != key {
        return Err(StorageError::CorruptRecord {
            key: String::from_utf8_lossy(key).into_owned(),
            reason: format!("value carries path hash {}", record.path_hash),
        });
    }
    Ok(record)
}

impl FileRecordStore for SledFileRecordStore {
    fn get(&self, path_hash: &str) -> Result<Option<StoredRecord>, StorageError> {
        match self.files.get(path_hash.as_bytes())? {
            Some(value) => Ok(Some(decode(path_hash.as_bytes(), &value)?)),
            None => Ok(None),
        }
    }

    fn put(&self, record: &StoredRecord) -> Result<(), StorageError> {
        let value = bincode::serialize(record)?;
        self.files.insert(record.path_hash.as_bytes(), value)?;
        Ok(())
    }

    fn remove(&self, path_hash: &str) -> Result<bool, StorageError> {
        Ok(self.files.remove(path_hash.as_bytes())?.is_some())
    }

    fn list(&self) -> Result<Vec<StoredRecord>, StorageError> {
        self.files
            .iter()
            .map(|item| {
                let (key, value) = item?;
                decode(&key, &value)
            })
            .collect()
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}
