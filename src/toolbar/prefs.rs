use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const TOOLBAR_EXPANDED_KEY: &str = "toolbar_expanded";

/// Absolute expiry of persisted flags, in seconds since the epoch:
/// `2^31 - 1`, i.e. "forever" for practical purposes.
pub const FAR_FUTURE_EXPIRY_SECS: u64 = (1 << 31) - 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefEntry {
    value: String,
    expires_at: u64,
    path: String,
}

/// Long-lived client-side preferences, stored as a small JSON file. Each
/// entry carries an absolute expiry and is scoped to the whole
/// application (`path: "/"`).
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    file: PathBuf,
}

impl PreferenceStore {
    pub fn new(file: impl AsRef<Path>) -> Self {
        PreferenceStore {
            file: file.as_ref().to_path_buf(),
        }
    }

    pub fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(
            key.to_string(),
            PrefEntry {
                value: value.to_string(),
                expires_at: FAR_FUTURE_EXPIRY_SECS,
                path: "/".to_string(),
            },
        );
        let body = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.file, body)
            .with_context(|| format!("failed to write preferences to {}", self.file.display()))
    }

    pub fn load(&self, key: &str) -> Option<String> {
        let entries = self.read_entries();
        let entry = entries.get(key)?;
        if entry.expires_at <= now_secs() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// The toolbar starts expanded unless the stored flag is literally
    /// `"false"`; a missing or expired entry reads as expanded.
    pub fn toolbar_expanded(&self) -> bool {
        self.load(TOOLBAR_EXPANDED_KEY).as_deref() != Some("false")
    }

    pub fn save_toolbar_expanded(&self, expanded: bool) -> Result<()> {
        self.save(TOOLBAR_EXPANDED_KEY, if expanded { "true" } else { "false" })
    }

    fn read_entries(&self) -> BTreeMap<String, PrefEntry> {
        fs::read_to_string(&self.file)
            .ok()
            .and_then(|body| serde_json::from_str(&body).ok())
            .unwrap_or_default()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
