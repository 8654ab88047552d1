use std::fs;

use tagdex::query;
use tagdex::session::IndexSession;
use tagdex::store::persistence::SledFileRecordStore;
use tagdex::store::FileRecordStore;
use tagdex::types::StoredRecord;
use tagdex::tree::walker::WalkerConfig;
use tempfile::TempDir;

fn stored(hash: &str, path: &str, tags: &str) -> StoredRecord {
    StoredRecord {
        path_hash: hash.to_string(),
        path: path.to_string(),
        file_hash: "0".repeat(64),
        tags: tags.to_string(),
    }
}

#[test]
fn beach_matches_both_records_and_zzz_none() {
    let store = SledFileRecordStore::temporary().unwrap();
    store.put(&stored("h1", "/p/holiday.md", "holiday;beach")).unwrap();
    store.put(&stored("h2", "/p/work.md", "work;beach")).unwrap();

    let hits = query::search(&store, "beach").unwrap();
    assert_eq!(hits.len(), 2);
    assert!(query::search(&store, "zzz").unwrap().is_empty());
}

#[test]
fn substring_matches_inside_a_tag() {
    let store = SledFileRecordStore::temporary().unwrap();
    store.put(&stored("h1", "/p/cat.png", "photo")).unwrap();

    let hits = query::search(&store, "hot").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/p/cat.png");
}

#[test]
fn search_after_sync_sees_committed_tags() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("notes.md"),
        "<!--\n[metadata]\ntags = [\"Rust\", \"tooling\"]\n-->\n# Notes",
    )
    .unwrap();
    fs::write(root.join("untagged.md"), "# Nothing").unwrap();

    let session =
        IndexSession::open(root.clone(), &temp.path().join("store"), WalkerConfig::default())
            .unwrap();
    let (report, matches) = session.sync_and_search("rust").unwrap();
    assert_eq!(report.scanned, 2);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].tags, "Rust;tooling");

    fs::write(root.join("untagged.md"), "<!--\n[metadata]\ntags = [\"rustacean\"]\n-->").unwrap();
    let (_, matches) = session.sync_and_search("RUST").unwrap();
    assert_eq!(matches.len(), 2);
}
