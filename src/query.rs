//! Tag substring search over the store.
//!
//! Matching is case-insensitive and runs over the flattened tag string, so a
//! query matches inside a tag and across the delimiter: `"hot"` finds
//! `"photo"`. An empty query matches every record.

use crate::error::StorageError;
use crate::store::FileRecordStore;
use serde::{Deserialize, Serialize};

/// Projection of a stored record returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMatch {
    pub path_hash: String,
    pub path: String,
    pub tags: String,
}

/// Return every record whose tags contain `substring`, sorted by path.
pub fn search(store: &dyn FileRecordStore, substring: &str) -> Result<Vec<TagMatch>, StorageError> {
    let needle = substring.to_lowercase();
    let mut matches: Vec<TagMatch> = store
        .list()?
        .into_iter()
        .filter(|record| record.tags.to_lowercase().contains(&needle))
        .map(|record| TagMatch {
            path_hash: record.path_hash,
            path: record.path,
            tags: record.tags,
        })
        .collect();
    matches.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::persistence::SledFileRecordStore;
    use crate::types::StoredRecord;

    fn seeded_store() -> SledFileRecordStore {
        let store = SledFileRecordStore::temporary().unwrap();
        for (hash, path, tags) in [
            ("h1", "/r/holiday.jpg", "holiday;beach"),
            ("h2", "/r/work.pdf", "work;beach"),
            ("h3", "/r/cat.png", "Photo;Pets"),
            ("h4", "/r/plain.txt", ""),
        ] {
            store
                .put(&StoredRecord {
                    path_hash: hash.to_string(),
                    path: path.to_string(),
                    file_hash: "f".to_string(),
                    tags: tags.to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_search_returns_all_records_with_tag() {
        let store = seeded_store();
        let paths: Vec<String> = search(&store, "beach")
            .unwrap()
            .into_iter()
            .map(|m| m.path)
            .collect();
        assert_eq!(paths, vec!["/r/holiday.jpg", "/r/work.pdf"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search(&seeded_store(), "zzz").unwrap().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = seeded_store();
        let hits = search(&store, "HOT").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "/r/cat.png");
        assert_eq!(hits[0].tags, "Photo;Pets");
        assert_eq!(hits[0].path_hash, "h3");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(search(&seeded_store(), "").unwrap().len(), 4);
    }
}
