use serde_json::Value;
use tempfile::tempdir;

use crate::toolbar::{FAR_FUTURE_EXPIRY_SECS, PreferenceStore, TOOLBAR_EXPANDED_KEY};

#[test]
fn expanded_is_the_default_without_a_file() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path().join("prefs.json"));
    assert!(store.toolbar_expanded());
}

#[test]
fn collapsed_flag_round_trips_across_store_instances() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("prefs.json");

    let store = PreferenceStore::new(&file);
    store.save_toolbar_expanded(false).unwrap();
    assert!(!store.toolbar_expanded());

    let reopened = PreferenceStore::new(&file);
    assert!(!reopened.toolbar_expanded());
    reopened.save_toolbar_expanded(true).unwrap();
    assert!(reopened.toolbar_expanded());
}

#[test]
fn only_a_literal_false_collapses_the_toolbar() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path().join("prefs.json"));
    store.save(TOOLBAR_EXPANDED_KEY, "junk").unwrap();
    assert!(store.toolbar_expanded());
}

#[test]
fn entries_carry_a_far_future_expiry_scoped_to_the_root() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("prefs.json");
    PreferenceStore::new(&file).save_toolbar_expanded(false).unwrap();

    let body: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    let entry = &body[TOOLBAR_EXPANDED_KEY];
    assert_eq!(entry["value"], "false");
    assert_eq!(entry["expires_at"], FAR_FUTURE_EXPIRY_SECS);
    assert_eq!(entry["path"], "/");
}

#[test]
fn unrelated_keys_are_preserved_on_save() {
    let dir = tempdir().unwrap();
    let store = PreferenceStore::new(dir.path().join("prefs.json"));
    store.save("language", "de").unwrap();
    store.save_toolbar_expanded(false).unwrap();
    assert_eq!(store.load("language").as_deref(), Some("de"));
}
