use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::Value;

use super::{
    ApiRequest, ContentStore, HistoryEntry, StoreError, get_content_request, get_history_request,
    get_schema_request, revert_history_request, update_content_request,
};

/// In-process store used by the demo binary and the tests. It answers the
/// same dispatchable operations a remote store would, records the requests
/// it would have sent, and keeps a version list per path so history
/// retrieval and reverts behave like the real thing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: HashMap<String, Value>,
    schemas: HashMap<String, Value>,
    versions: HashMap<String, Vec<(HistoryEntry, Value)>>,
    requests: Vec<ApiRequest>,
    update_failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn insert_content(&mut self, path: impl Into<String>, content: Value) {
        let path = path.into();
        self.record_version(&path, &content);
        self.contents.insert(path, content);
    }

    pub fn insert_schema(&mut self, type_name: impl Into<String>, schema: Value) {
        self.schemas.insert(type_name.into(), schema);
    }

    /// Make every subsequent `update_content` fail with `message`, until
    /// cleared. Lets tests and the demo exercise the error banner path.
    pub fn fail_updates_with(&mut self, message: impl Into<String>) {
        self.update_failure = Some(message.into());
    }

    pub fn clear_update_failure(&mut self) {
        self.update_failure = None;
    }

    pub fn requests(&self) -> &[ApiRequest] {
        &self.requests
    }

    pub fn content_at(&self, path: &str) -> Option<&Value> {
        self.contents.get(path)
    }

    fn record_version(&mut self, path: &str, content: &Value) {
        let versions = self.versions.entry(path.to_string()).or_default();
        let version = versions.len() as u64;
        versions.push((
            HistoryEntry {
                version,
                actor: None,
                modified: None,
            },
            content.clone(),
        ));
    }
}

impl ContentStore for MemoryStore {
    fn get_content(&mut self, path: &str) -> Result<Value, StoreError> {
        self.requests.push(get_content_request(path));
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::new(format!("no content at '{path}'")))
    }

    fn get_schema(&mut self, type_name: &str) -> Result<Value, StoreError> {
        self.requests.push(get_schema_request(type_name));
        self.schemas
            .get(type_name)
            .cloned()
            .ok_or_else(|| StoreError::new(format!("no schema for type '{type_name}'")))
    }

    fn update_content(
        &mut self,
        path: &str,
        payload: &IndexMap<String, Value>,
    ) -> Result<(), StoreError> {
        let body = Value::Object(
            payload
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        );
        self.requests.push(update_content_request(path, body));
        if let Some(message) = &self.update_failure {
            return Err(StoreError::new(message.clone()));
        }
        let current = self
            .contents
            .get_mut(path)
            .ok_or_else(|| StoreError::new(format!("no content at '{path}'")))?;
        if let Value::Object(map) = current {
            for (key, value) in payload {
                map.insert(key.clone(), value.clone());
            }
        }
        let snapshot = current.clone();
        self.record_version(path, &snapshot);
        Ok(())
    }

    fn get_history(&mut self, url: &str) -> Result<Vec<HistoryEntry>, StoreError> {
        self.requests.push(get_history_request(url));
        let mut entries: Vec<HistoryEntry> = self
            .versions
            .get(url)
            .map(|versions| versions.iter().map(|(entry, _)| entry.clone()).collect())
            .unwrap_or_default();
        entries.reverse();
        Ok(entries)
    }

    fn revert_history(&mut self, url: &str, version: u64) -> Result<(), StoreError> {
        self.requests.push(revert_history_request(url, version));
        let snapshot = self
            .versions
            .get(url)
            .and_then(|versions| {
                versions
                    .iter()
                    .find(|(entry, _)| entry.version == version)
                    .map(|(_, content)| content.clone())
            })
            .ok_or_else(|| StoreError::new(format!("no version {version} at '{url}'")))?;
        self.contents.insert(url.to_string(), snapshot);
        Ok(())
    }
}
