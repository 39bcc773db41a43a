use serde_json::Value;

/// Content blocks for the visual display mode: a fixed, ordered list
/// rendered instead of the schema-driven fieldset layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Edits the content's `title` property in place.
    Title,
    /// A rich-text body; `data` carries `{content-type, data, encoding}`.
    RichText { data: Value },
}

impl Block {
    pub fn html(&self) -> Option<&str> {
        match self {
            Block::RichText { data } => data.get("data").and_then(Value::as_str),
            Block::Title => None,
        }
    }
}
