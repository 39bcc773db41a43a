use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::store::{ApiRequest, ContentStore, MemoryStore, Method};

fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert_schema("Document", json!({"properties": {}}));
    store.insert_content(
        "/front-page",
        json!({"@type": "Document", "title": "Welcome!"}),
    );
    store
}

fn payload(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

fn last_request(store: &MemoryStore) -> &ApiRequest {
    store.requests().last().expect("no requests recorded")
}

#[test]
fn schema_fetches_go_through_the_types_endpoint() {
    let mut store = seeded_store();
    store.get_schema("Document").unwrap();
    let request = last_request(&store);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/@types/Document");
    assert_eq!(request.body, None);
}

#[test]
fn updates_patch_the_content_path_with_the_payload() {
    let mut store = seeded_store();
    store
        .update_content("/front-page", &payload(&[("title", json!("Changed"))]))
        .unwrap();
    let request = last_request(&store);
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.path, "/front-page");
    assert_eq!(request.body, Some(json!({"title": "Changed"})));
    assert_eq!(
        store.content_at("/front-page").unwrap()["title"],
        json!("Changed")
    );
}

#[test]
fn history_fetches_hit_the_history_endpoint_newest_first() {
    let mut store = seeded_store();
    store
        .update_content("/front-page", &payload(&[("title", json!("Changed"))]))
        .unwrap();
    let entries = store.get_history("/front-page").unwrap();
    let request = last_request(&store);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/front-page/@history");
    let versions: Vec<u64> = entries.iter().map(|entry| entry.version).collect();
    assert_eq!(versions, [1, 0]);
}

#[test]
fn reverts_patch_the_history_endpoint_with_the_version() {
    let mut store = seeded_store();
    store
        .update_content("/front-page", &payload(&[("title", json!("Changed"))]))
        .unwrap();
    store.revert_history("/front-page", 0).unwrap();
    let request = last_request(&store);
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.path, "/front-page/@history");
    assert_eq!(request.body, Some(json!({"version": 0})));
    assert_eq!(
        store.content_at("/front-page").unwrap()["title"],
        json!("Welcome!")
    );
}

#[test]
fn reverting_an_unknown_version_fails() {
    let mut store = seeded_store();
    let err = store.revert_history("/front-page", 9).unwrap_err();
    assert!(err.message.contains("version 9"));
}

#[test]
fn forced_update_failures_clear_again() {
    let mut store = seeded_store();
    store.fail_updates_with("backend unavailable");
    let err = store
        .update_content("/front-page", &payload(&[("title", json!("x"))]))
        .unwrap_err();
    assert_eq!(err.message, "backend unavailable");
    // The content must be untouched by the failed update.
    assert_eq!(
        store.content_at("/front-page").unwrap()["title"],
        json!("Welcome!")
    );

    store.clear_update_failure();
    store
        .update_content("/front-page", &payload(&[("title", json!("x"))]))
        .unwrap();
}

#[test]
fn missing_content_is_an_error() {
    let mut store = seeded_store();
    let err = store.get_content("/nowhere").unwrap_err();
    assert!(err.message.contains("/nowhere"));
}
