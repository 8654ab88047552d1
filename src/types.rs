//! Core record types shared by the walker, the reconciler and the store.

use serde::{Deserialize, Serialize};

/// Delimiter used when flattening a tag list into its stored form.
pub const TAG_DELIMITER: &str = ";";

/// A regular file as seen by one walk. Never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// BLAKE3 hex digest of the absolute path string; the store key.
    pub path_hash: String,
    /// Absolute path at the time of the walk.
    pub path: String,
    /// BLAKE3 hex digest of the raw file bytes.
    pub content_hash: String,
    /// Trimmed tags from the leading metadata block, possibly empty.
    pub tags: Vec<String>,
}

impl FileRecord {
    /// Tags flattened the way they are stored.
    pub fn flat_tags(&self) -> String {
        flatten_tags(&self.tags)
    }

    pub fn to_stored(&self) -> StoredRecord {
        StoredRecord {
            path_hash: self.path_hash.clone(),
            path: self.path.clone(),
            file_hash: self.content_hash.clone(),
            tags: self.flat_tags(),
        }
    }
}

/// Persisted form of a file, one per distinct `path_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub path_hash: String,
    pub path: String,
    pub file_hash: String,
    pub tags: String,
}

impl StoredRecord {
    /// Split the flattened tag string back into its parts.
    pub fn tag_list(&self) -> Vec<&str> {
        if self.tags.is_empty() {
            return Vec::new();
        }
        self.tags.split(TAG_DELIMITER).collect()
    }
}

/// Join tags with [`TAG_DELIMITER`], trimming each one.
pub fn flatten_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| t.as_ref().trim())
        .collect::<Vec<_>>()
        .join(TAG_DELIMITER)
}
