mod api;
mod memory;

pub use api::{
    ApiRequest, Method, get_content_request, get_history_request, get_schema_request,
    revert_history_request, update_content_request,
};
pub use memory::MemoryStore;

use indexmap::IndexMap;
use serde_json::Value;

/// Failure reported by the external store. Surfaces in the UI as a single
/// top-level banner; it never aborts the editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StoreError {}

/// One recorded content version.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub version: u64,
    pub actor: Option<String>,
    pub modified: Option<String>,
}

/// The external content/schema store. Every operation is a dispatched
/// request resolving to an updated slice; the UI treats the returned data
/// as read-only input apart from its local edit buffer.
pub trait ContentStore {
    fn get_content(&mut self, path: &str) -> Result<Value, StoreError>;
    fn get_schema(&mut self, type_name: &str) -> Result<Value, StoreError>;
    fn update_content(
        &mut self,
        path: &str,
        payload: &IndexMap<String, Value>,
    ) -> Result<(), StoreError>;
    fn get_history(&mut self, url: &str) -> Result<Vec<HistoryEntry>, StoreError>;
    fn revert_history(&mut self, url: &str, version: u64) -> Result<(), StoreError>;
}
