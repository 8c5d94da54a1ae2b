//! Theme preference store: defaults, malformed values, toggle round trips.

use pretty_assertions::assert_eq;
use tiptally::prefs::{self, FilePrefStore, MemoryPrefStore, PrefStore};

#[test]
fn missing_preference_defaults_to_light() {
    let store = MemoryPrefStore::default();
    assert_eq!(prefs::load_dark_mode(&store), false);
}

#[test]
fn malformed_preference_defaults_to_light() {
    let mut store = MemoryPrefStore::default();
    for junk in ["not-json", "1", "\"yes\"", "TRUE", ""] {
        store.set(prefs::DARK_MODE_KEY, junk);
        assert_eq!(prefs::load_dark_mode(&store), false, "value {junk:?}");
    }
}

#[test]
fn stored_value_round_trips() {
    let mut store = MemoryPrefStore::default();
    prefs::store_dark_mode(&mut store, true);
    assert_eq!(store.get(prefs::DARK_MODE_KEY).as_deref(), Some("true"));
    assert_eq!(prefs::load_dark_mode(&store), true);

    prefs::store_dark_mode(&mut store, false);
    assert_eq!(store.get(prefs::DARK_MODE_KEY).as_deref(), Some("false"));
    assert_eq!(prefs::load_dark_mode(&store), false);
}

#[test]
fn toggling_twice_returns_to_the_initial_state() {
    let mut store = MemoryPrefStore::default();
    let initial = prefs::load_dark_mode(&store);

    let toggled = !initial;
    prefs::store_dark_mode(&mut store, toggled);
    assert_eq!(prefs::load_dark_mode(&store), toggled);

    let toggled_back = !toggled;
    prefs::store_dark_mode(&mut store, toggled_back);
    assert_eq!(prefs::load_dark_mode(&store), initial);
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut store = FilePrefStore::open(&path);
    prefs::store_dark_mode(&mut store, true);
    drop(store);

    let reopened = FilePrefStore::open(&path);
    assert_eq!(prefs::load_dark_mode(&reopened), true);
}

#[test]
fn file_store_treats_a_corrupt_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let store = FilePrefStore::open(&path);
    assert_eq!(prefs::load_dark_mode(&store), false);
}

#[test]
fn file_store_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePrefStore::open(&dir.path().join("never-written.json"));
    assert_eq!(store.get(prefs::DARK_MODE_KEY), None);
}
