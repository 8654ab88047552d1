//! Reconciliation of a walk snapshot against the store.
//!
//! One cycle prunes records whose file is gone, walks the tree, then inserts
//! new files and updates changed ones. Pruning runs first so a moved file
//! never coexists with its stale record after the cycle.
//!
//! There is no move detection: a renamed file is a new path identity, so the
//! old record is pruned and a fresh one inserted.

use crate::error::ApiError;
use crate::error::StorageError;
use crate::store::FileRecordStore;
use crate::tree::walker::{SkippedEntry, Walker};
use crate::types::FileRecord;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Write counts of one reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl ReconcileStats {
    pub fn writes(&self) -> usize {
        self.inserted + self.updated
    }
}

/// What a full cycle did, reported to the user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Regular files seen by the walk.
    pub scanned: usize,
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub pruned: usize,
    pub skipped: usize,
    pub skipped_entries: Vec<SkippedEntry>,
}

/// Apply the minimal inserts and updates that bring the store in line with
/// `snapshot`.
///
/// Records with a matching content hash are not written at all.
pub fn reconcile(
    store: &dyn FileRecordStore,
    snapshot: &[FileRecord],
) -> Result<ReconcileStats, StorageError> {
    let mut stats = ReconcileStats::default();
    for record in snapshot {
        match store.get(&record.path_hash)? {
            None => {
                store.put(&record.to_stored())?;
                debug!(path = %record.path, "Inserted record");
                stats.inserted += 1;
            }
            Some(mut stored) if stored.file_hash != record.content_hash => {
                stored.file_hash = record.content_hash.clone();
                stored.tags = record.flat_tags();
                store.put(&stored)?;
                debug!(path = %record.path, "Updated record");
                stats.updated += 1;
            }
            Some(_) => stats.unchanged += 1,
        }
    }
    Ok(stats)
}

/// Delete every record whose path is no longer an existing regular file.
pub fn prune(store: &dyn FileRecordStore) -> Result<usize, StorageError> {
    let mut pruned = 0;
    for record in store.list()? {
        if Path::new(&record.path).is_file() {
            continue;
        }
        if store.remove(&record.path_hash)? {
            debug!(path = %record.path, "Pruned record");
            pruned += 1;
        }
    }
    Ok(pruned)
}

/// Run one full reconciliation cycle: prune, walk, reconcile, flush.
pub fn run_cycle(
    store: &dyn FileRecordStore,
    walker: &Walker,
    root: &Path,
) -> Result<SyncReport, ApiError> {
    let pruned = prune(store)?;
    let outcome = walker.walk(root)?;
    let stats = reconcile(store, &outcome.records)?;
    store.flush()?;

    let report = SyncReport {
        scanned: outcome.records.len(),
        inserted: stats.inserted,
        updated: stats.updated,
        unchanged: stats.unchanged,
        pruned,
        skipped: outcome.skipped.len(),
        skipped_entries: outcome.skipped,
    };
    info!(
        root = %root.display(),
        scanned = report.scanned,
        inserted = report.inserted,
        updated = report.updated,
        pruned = report.pruned,
        skipped = report.skipped,
        "Reconciliation cycle complete"
    );
    Ok(report)
}
