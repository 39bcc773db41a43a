use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    domain::{ContentSchema, parse_content_schema},
    form::{Block, FormState, SubmitOutcome},
    store::ContentStore,
};

/// Where the container goes after an action completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Stay,
    To(String),
}

/// The Edit container: fetches `{content, schema}` from the store, feeds
/// the form engine, and routes post-submit navigation.
#[derive(Debug)]
pub struct EditSession {
    pub path: String,
    pub return_url: Option<String>,
    pub content_type: String,
    pub schema: ContentSchema,
    pub form: FormState,
}

impl EditSession {
    pub fn begin(
        store: &mut dyn ContentStore,
        path: &str,
        return_url: Option<String>,
    ) -> Result<Self> {
        let content = store
            .get_content(path)
            .with_context(|| format!("failed to load content at '{path}'"))?;
        let content_type = content
            .get("@type")
            .and_then(Value::as_str)
            .context("content has no @type")?
            .to_string();
        let raw_schema = store
            .get_schema(&content_type)
            .with_context(|| format!("failed to load schema for '{content_type}'"))?;
        let schema = parse_content_schema(&raw_schema)?;

        let content_map = content.as_object().cloned().unwrap_or_default();
        let blocks = default_blocks(&content_map);
        let form = FormState::new(&schema, &content_map).with_blocks(blocks);

        Ok(EditSession {
            path: path.to_string(),
            return_url,
            content_type,
            schema,
            form,
        })
    }

    /// Validate and, when clean, dispatch the update. A store failure
    /// becomes the form's top-level error banner; the form stays editable
    /// and resubmittable.
    pub fn submit(&mut self, store: &mut dyn ContentStore) -> Navigation {
        self.form.clear_top_error();
        match self.form.submit(&self.schema) {
            SubmitOutcome::Accepted(payload) => match store.update_content(&self.path, &payload) {
                Ok(()) => Navigation::To(self.destination()),
                Err(err) => {
                    self.form.set_top_error(err.message);
                    Navigation::Stay
                }
            },
            SubmitOutcome::Rejected { .. } => Navigation::Stay,
        }
    }

    pub fn cancel(&self) -> Navigation {
        Navigation::To(self.destination())
    }

    fn destination(&self) -> String {
        self.return_url.clone().unwrap_or_else(|| self.path.clone())
    }
}

/// The fixed block list the visual mode renders: the title block first,
/// then the content's rich-text body when it has one.
fn default_blocks(content: &serde_json::Map<String, Value>) -> Vec<Block> {
    let mut blocks = vec![Block::Title];
    if let Some(data) = content.get("text") {
        if !data.is_null() {
            blocks.push(Block::RichText { data: data.clone() });
        }
    }
    blocks
}
