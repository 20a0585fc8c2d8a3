//! The CLI's load/apply/save cycle against a real filesystem.

use registrar::store;

use crate::common::{addr, owner};

#[test]
fn init_then_load_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    store::init(&path, owner()).unwrap();

    let mut registry = store::load(&path).unwrap();
    assert_eq!(registry.owner(), owner());
    assert!(registry.is_empty());

    registry
        .add_entries(owner(), vec![addr(1)], vec!["token vault".to_string()])
        .unwrap();
    store::save(&path, &registry).unwrap();

    let reloaded = store::load(&path).unwrap();
    assert_eq!(reloaded.lookup(addr(1)), "token vault");
}

#[test]
fn init_refuses_to_clobber_an_existing_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    store::init(&path, owner()).unwrap();
    let err = store::init(&path, addr(0x99)).unwrap_err();
    assert!(err.to_string().contains("already exists"));

    // The original store is untouched.
    assert_eq!(store::load(&path).unwrap().owner(), owner());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/registry.json");

    let registry = registrar_core::Registry::new(owner());
    store::save(&path, &registry).unwrap();
    assert_eq!(store::load(&path).unwrap().owner(), owner());
}

#[test]
fn load_reports_missing_and_malformed_stores_distinctly() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = store::load(&missing).unwrap_err();
    assert!(err.to_string().contains("no registry at"));

    let garbled = dir.path().join("garbled.json");
    std::fs::write(&garbled, "{ not json").unwrap();
    let err = store::load(&garbled).unwrap_err();
    assert!(err.to_string().contains("malformed registry snapshot"));
}

#[test]
fn load_keeps_the_init_hint_for_missing_stores_only() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("absent.json");
    let err = store::load(&missing).unwrap_err();
    assert!(err.to_string().contains("registrar init"));

    // A store that exists but cannot be read as a file is an I/O problem,
    // not an uninitialized registry; suggesting init would misdiagnose it.
    let unreadable = dir.path().join("actually-a-dir");
    std::fs::create_dir(&unreadable).unwrap();
    let err = store::load(&unreadable).unwrap_err();
    assert!(err.to_string().contains("failed to read registry"));
    assert!(!err.to_string().contains("registrar init"));
}
