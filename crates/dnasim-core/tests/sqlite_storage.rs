use std::path::PathBuf;

use tempfile::TempDir;

use dnasim_core::storage::{
    open_store, seed_defaults, NewPreset, PresetStore, SqliteStore, StoreBackend,
    DEFAULT_PRESET_NAME,
};
use dnasim_core::SymbolMapping;

/// Database path inside a directory removed when the guard drops.
fn temp_db() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("presets.db");
    (dir, path)
}

fn preset(name: &str, text: &str) -> NewPreset {
    NewPreset::new(name, text, &SymbolMapping::default())
}

#[test]
fn test_presets_survive_reopen() {
    let (_dir, path) = temp_db();

    let created = {
        let store = SqliteStore::open(&path).expect("open should succeed");
        store
            .create_preset(&preset("Greeting", "Hello"))
            .expect("create should succeed")
    };
    assert!(path.exists());

    let store = SqliteStore::open(&path).expect("reopen should succeed");
    let fetched = store
        .get_preset(created.id)
        .expect("get should succeed")
        .expect("preset should exist");
    assert_eq!(fetched, created);
}

#[test]
fn test_list_in_creation_order_and_delete() {
    let (_dir, path) = temp_db();
    let store = SqliteStore::open(&path).expect("open should succeed");

    let a = store.create_preset(&preset("Same name", "a")).unwrap();
    let b = store.create_preset(&preset("Same name", "b")).unwrap();
    let c = store.create_preset(&preset("Other", "c")).unwrap();

    let ids: Vec<i64> = store.list_presets().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);

    assert!(store.delete_preset(b.id).unwrap());
    let ids: Vec<i64> = store.list_presets().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    assert!(store.get_preset(b.id).unwrap().is_none());
}

#[test]
fn test_ids_keep_increasing_after_delete() {
    let (_dir, path) = temp_db();
    let store = SqliteStore::open(&path).expect("open should succeed");

    let first = store.create_preset(&preset("one", "")).unwrap();
    store.delete_preset(first.id).unwrap();
    let second = store.create_preset(&preset("two", "")).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn test_seed_only_once_across_restarts() {
    let (_dir, path) = temp_db();
    let backend = StoreBackend::Sqlite(path.clone());

    let store = open_store(&backend).expect("open should succeed");
    let seeded = seed_defaults(store.as_ref()).unwrap();
    assert_eq!(seeded.map(|p| p.name), Some(DEFAULT_PRESET_NAME.to_string()));
    drop(store);

    let store = open_store(&backend).expect("reopen should succeed");
    assert!(seed_defaults(store.as_ref()).unwrap().is_none());
    assert_eq!(store.list_presets().unwrap().len(), 1);
}

#[test]
fn test_open_creates_parent_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("presets.db");

    let store = SqliteStore::open(&path).expect("open should succeed");
    assert_eq!(store.path(), Some(path.as_path()));
    assert!(path.exists());
}
