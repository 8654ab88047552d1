//! Index session: explicit owner of the store handle and the index root.
//!
//! A session is opened once, used for any number of sync cycles and
//! searches, and flushes the store when dropped.

use crate::error::ApiError;
use crate::query::{self, TagMatch};
use crate::store::persistence::SledFileRecordStore;
use crate::store::FileRecordStore;
use crate::sync::{self, SyncReport};
use crate::tree::walker::{Walker, WalkerConfig};
use crate::types::StoredRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct IndexSession {
    store: SledFileRecordStore,
    root: PathBuf,
    walker: Walker,
}

impl IndexSession {
    /// Open the store at `store_path` for indexing `root`.
    pub fn open(
        root: PathBuf,
        store_path: &Path,
        mut walker_config: WalkerConfig,
    ) -> Result<Self, ApiError> {
        let store = SledFileRecordStore::new(store_path)?;
        // never index the store's own files
        if let Ok(canonical) = dunce::canonicalize(store_path) {
            walker_config.excluded.push(canonical);
        }
        debug!(store = %store_path.display(), records = store.len(), "Opened index store");
        Ok(Self::with_store(root, store, walker_config))
    }

    /// Build a session around an already opened store.
    pub fn with_store(root: PathBuf, store: SledFileRecordStore, walker_config: WalkerConfig) -> Self {
        Self {
            store,
            root,
            walker: Walker::new(walker_config),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &dyn FileRecordStore {
        &self.store
    }

    /// Run one reconciliation cycle over the root.
    pub fn sync(&self) -> Result<SyncReport, ApiError> {
        sync::run_cycle(&self.store, &self.walker, &self.root)
    }

    /// Search the store as it is, without syncing first.
    pub fn search(&self, substring: &str) -> Result<Vec<TagMatch>, ApiError> {
        Ok(query::search(&self.store, substring)?)
    }

    /// Run a full cycle, then search; the query surface of the index.
    pub fn sync_and_search(&self, substring: &str) -> Result<(SyncReport, Vec<TagMatch>), ApiError> {
        let report = self.sync()?;
        let matches = self.search(substring)?;
        Ok((report, matches))
    }

    /// Every stored record, sorted by path.
    pub fn list(&self) -> Result<Vec<StoredRecord>, ApiError> {
        let mut records = self.store.list()?;
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }
}

impl Drop for IndexSession {
    fn drop(&mut self) {
        if let Err(e) = self.store.flush() {
            warn!("Failed to flush index store on close: {}", e);
        }
    }
}
