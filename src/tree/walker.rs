//! Recursive filesystem walk producing one [`FileRecord`] per regular file.

use crate::error::{MetadataError, WalkError};
use crate::metadata;
use crate::tree::hasher::{hash_content, hash_path};
use crate::types::FileRecord;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Follow symbolic links instead of skipping them
    pub follow_symlinks: bool,
    /// Maximum recursion depth below the root; `None` means unlimited
    pub max_depth: Option<usize>,
    /// Absolute paths pruned from the walk, e.g. a store living under the root
    pub excluded: Vec<PathBuf>,
}

/// Why an entry was left out of the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Symlink,
    NonUtf8Path,
    Unreadable(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Symlink => write!(f, "symbolic link"),
            SkipReason::NonUtf8Path => write!(f, "path is not valid UTF-8"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
        }
    }
}

/// An entry the walk could not index.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Snapshot of the tree plus everything that had to be skipped.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub records: Vec<FileRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Filesystem walker
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and build a record for every regular file below it.
    ///
    /// Per-entry failures are collected in [`WalkOutcome::skipped`]; only an
    /// unusable root fails the whole walk. Traversal order is unspecified.
    pub fn walk(&self, root: &Path) -> Result<WalkOutcome, WalkError> {
        let root = absolute_root(root)?;
        let mut walk = WalkDir::new(&root).follow_links(self.config.follow_symlinks);
        if let Some(depth) = self.config.max_depth {
            walk = walk.max_depth(depth);
        }

        let excluded = &self.config.excluded;
        let entries = walk
            .into_iter()
            .filter_entry(|e| !excluded.iter().any(|x| e.path().starts_with(x)));

        let mut outcome = WalkOutcome::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.clone());
                    outcome.skip(path, SkipReason::Unreadable(err.to_string()));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if file_type.is_symlink() {
                outcome.skip(entry.into_path(), SkipReason::Symlink);
                continue;
            }
            if !file_type.is_file() {
                // sockets, fifos and devices are not index candidates
                debug!(path = %entry.path().display(), "Ignoring special file");
                continue;
            }

            match read_record(entry.path()) {
                Ok(record) => outcome.records.push(record),
                Err(reason) => outcome.skip(entry.into_path(), reason),
            }
        }

        debug!(
            root = %root.display(),
            files = outcome.records.len(),
            skipped = outcome.skipped.len(),
            "Walk complete"
        );
        Ok(outcome)
    }
}

impl WalkOutcome {
    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        warn!(path = %path.display(), reason = %reason, "Skipping entry");
        self.skipped.push(SkippedEntry { path, reason });
    }
}

fn absolute_root(root: &Path) -> Result<PathBuf, WalkError> {
    let canonical = dunce::canonicalize(root).map_err(|source| WalkError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    })?;
    if !canonical.is_dir() {
        return Err(WalkError::InvalidRoot {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }
    Ok(canonical)
}

/// Read one file and build its record. The handle is closed before returning.
fn read_record(path: &Path) -> Result<FileRecord, SkipReason> {
    let path_str = path.to_str().ok_or(SkipReason::NonUtf8Path)?;
    let content = std::fs::read(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;

    let tags = match metadata::extract(&content) {
        Ok(tags) => tags,
        Err(MetadataError::Decode(_)) => Vec::new(),
        Err(err) => {
            warn!(path = %path_str, error = %err, "Ignoring malformed metadata block");
            Vec::new()
        }
    };

    Ok(FileRecord {
        path_hash: hash_path(path_str),
        path: path_str.to_string(),
        content_hash: hash_content(&content),
        tags,
    })
}
