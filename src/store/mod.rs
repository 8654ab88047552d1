//! File Record Store
//!
//! Persisted index of [`StoredRecord`]s keyed by path identity hash. The
//! reconciler and the tag query only talk to the [`FileRecordStore`] trait;
//! [`persistence::SledFileRecordStore`] is the on-disk implementation.

pub mod persistence;

use crate::error::StorageError;
use crate::types::StoredRecord;

/// FileRecord Store interface
///
/// Every method is a single atomic store operation.
pub trait FileRecordStore {
    fn get(&self, path_hash: &str) -> Result<Option<StoredRecord>, StorageError>;

    /// Insert or overwrite the record under `record.path_hash`.
    fn put(&self, record: &StoredRecord) -> Result<(), StorageError>;

    /// Delete the record; returns whether one existed.
    fn remove(&self, path_hash: &str) -> Result<bool, StorageError>;

    fn list(&self) -> Result<Vec<StoredRecord>, StorageError>;

    /// Make all previous writes durable.
    fn flush(&self) -> Result<(), StorageError>;
}
