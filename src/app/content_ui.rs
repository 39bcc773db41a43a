use anyhow::Result;
use indexmap::IndexMap;
use serde_json::Value;

use crate::store::ContentStore;

use super::{options::UiOptions, runtime::App};

/// Entry point for embedding the editor: point it at a store and a
/// content path, then run the terminal UI.
pub struct ContentUI {
    store: Box<dyn ContentStore>,
    path: String,
    options: UiOptions,
}

impl ContentUI {
    pub fn new(store: Box<dyn ContentStore>, path: impl Into<String>) -> Self {
        Self {
            store,
            path: path.into(),
            options: UiOptions::default(),
        }
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the last payload the user saved, or `None` when the
    /// session ended without a save.
    pub fn run(self) -> Result<Option<IndexMap<String, Value>>> {
        let ContentUI {
            store,
            path,
            options,
        } = self;
        let mut app = App::new(store, &path, options)?;
        app.run()
    }
}
