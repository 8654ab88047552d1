use std::fs;

use tagdex::session::IndexSession;
use tagdex::store::persistence::SledFileRecordStore;
use tagdex::store::FileRecordStore;
use tagdex::sync;
use tagdex::tree::hasher::{hash_content, hash_path};
use tagdex::tree::walker::{Walker, WalkerConfig};
use tempfile::TempDir;

fn tree() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = dunce::canonicalize(temp.path()).unwrap().join("root");
    fs::create_dir_all(&root).unwrap();
    (temp, root)
}

#[test]
fn end_to_end_insert_then_prune_deleted_file() {
    let (temp, root) = tree();
    fs::write(root.join("a.txt"), "plain text, no metadata").unwrap();
    fs::write(
        root.join("b.txt"),
        "<!--\n[metadata]\ntags = [\"x\", \" y \"]\n-->\nbody",
    )
    .unwrap();

    let session =
        IndexSession::open(root.clone(), &temp.path().join("store"), WalkerConfig::default())
            .unwrap();
    let first = session.sync().unwrap();
    assert_eq!(first.inserted, 2);
    assert_eq!(first.skipped, 0);

    let records = session.list().unwrap();
    assert_eq!(records.len(), 2);
    let b = records.iter().find(|r| r.path.ends_with("b.txt")).unwrap();
    assert_eq!(b.tags, "x;y");
    let a = records.iter().find(|r| r.path.ends_with("a.txt")).unwrap();
    assert_eq!(a.tags, "");

    fs::remove_file(root.join("a.txt")).unwrap();
    let second = session.sync().unwrap();
    assert_eq!(second.pruned, 1);
    assert_eq!(second.inserted, 0);

    let records = session.list().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].path.ends_with("b.txt"));
}

#[test]
fn second_cycle_without_changes_writes_nothing() {
    let (temp, root) = tree();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("one.md"), "1").unwrap();
    fs::write(root.join("sub/two.md"), "2").unwrap();

    let session =
        IndexSession::open(root, &temp.path().join("store"), WalkerConfig::default()).unwrap();
    session.sync().unwrap();
    let again = session.sync().unwrap();
    assert_eq!(again.scanned, 2);
    assert_eq!(again.unchanged, 2);
    assert_eq!(again.inserted + again.updated + again.pruned, 0);
}

#[test]
fn content_change_updates_only_that_record() {
    let (temp, root) = tree();
    fs::write(root.join("stable.txt"), "stable").unwrap();
    fs::write(
        root.join("edited.txt"),
        "<!--\n[metadata]\ntags = [\"draft\"]\n-->\nv1",
    )
    .unwrap();

    let session =
        IndexSession::open(root.clone(), &temp.path().join("store"), WalkerConfig::default())
            .unwrap();
    session.sync().unwrap();
    let before = session.list().unwrap();
    let stable_before = before
        .iter()
        .find(|r| r.path.ends_with("stable.txt"))
        .unwrap()
        .clone();

    let edited = "<!--\n[metadata]\ntags = [\"final\", \"Reviewed\"]\n-->\nv2";
    fs::write(root.join("edited.txt"), edited).unwrap();
    let report = session.sync().unwrap();
    assert_eq!(report.updated, 1);
    assert_eq!(report.unchanged, 1);

    let after = session.list().unwrap();
    let edited_after = after.iter().find(|r| r.path.ends_with("edited.txt")).unwrap();
    assert_eq!(edited_after.file_hash, hash_content(edited.as_bytes()));
    assert_eq!(edited_after.tags, "final;Reviewed");
    assert_eq!(edited_after.path_hash, hash_path(&edited_after.path));

    let stable_after = after.iter().find(|r| r.path.ends_with("stable.txt")).unwrap();
    assert_eq!(*stable_after, stable_before);
}

#[test]
fn moved_file_is_pruned_and_reinserted() {
    let (temp, root) = tree();
    fs::write(root.join("old.txt"), "same bytes").unwrap();

    let session =
        IndexSession::open(root.clone(), &temp.path().join("store"), WalkerConfig::default())
            .unwrap();
    session.sync().unwrap();

    fs::rename(root.join("old.txt"), root.join("new.txt")).unwrap();
    let report = session.sync().unwrap();
    assert_eq!(report.pruned, 1);
    assert_eq!(report.inserted, 1);

    let records = session.list().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].path.ends_with("new.txt"));
}

#[test]
fn stale_record_is_removed_and_present_one_left_untouched() {
    let (temp, root) = tree();
    fs::write(root.join("present.txt"), "here").unwrap();

    let store = SledFileRecordStore::new(&temp.path().join("store")).unwrap();
    let walker = Walker::new(WalkerConfig::default());
    sync::run_cycle(&store, &walker, &root).unwrap();

    let ghost_path = root.join("ghost.txt").to_str().unwrap().to_string();
    store
        .put(&tagdex::types::StoredRecord {
            path_hash: hash_path(&ghost_path),
            path: ghost_path.clone(),
            file_hash: hash_content(b"gone"),
            tags: "old".to_string(),
        })
        .unwrap();
    let present_before = store.list().unwrap();
    assert_eq!(present_before.len(), 2);

    let report = sync::run_cycle(&store, &walker, &root).unwrap();
    assert_eq!(report.pruned, 1);
    assert_eq!(report.unchanged, 1);
    assert!(store.get(&hash_path(&ghost_path)).unwrap().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn missing_root_aborts_cycle() {
    let (temp, root) = tree();
    let session = IndexSession::open(
        root.join("does-not-exist"),
        &temp.path().join("store"),
        WalkerConfig::default(),
    )
    .unwrap();
    assert!(session.sync().is_err());
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped_and_reported() {
    use std::os::unix::fs::PermissionsExt;

    let (temp, root) = tree();
    fs::write(root.join("open.txt"), "ok").unwrap();
    let locked = root.join("locked.txt");
    fs::write(&locked, "secret").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root can read anything; nothing to observe in that case
    if fs::read(&locked).is_ok() {
        return;
    }

    let session =
        IndexSession::open(root, &temp.path().join("store"), WalkerConfig::default()).unwrap();
    let report = session.sync().unwrap();
    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped, 1);
    assert!(report.skipped_entries[0].path.ends_with("locked.txt"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}
