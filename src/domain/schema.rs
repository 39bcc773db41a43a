use indexmap::IndexMap;
use serde_json::Value;

/// A content type's editing schema: ordered fieldsets over a flat
/// property map, plus the ids that must be filled in before saving.
#[derive(Debug, Clone)]
pub struct ContentSchema {
    pub title: String,
    pub description: Option<String>,
    pub fieldsets: Vec<Fieldset>,
    pub properties: IndexMap<String, FieldSpec>,
    pub required: Vec<String>,
    pub layouts: Vec<String>,
}

/// A named, ordered group of properties rendered together (one tab).
#[derive(Debug, Clone)]
pub struct Fieldset {
    pub id: String,
    pub title: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Text,
    RichText,
    Boolean,
    Integer,
    Number,
    Choice(Vec<String>),
    List,
    Date,
    /// Unknown `type`/`widget` declarations render like plain strings.
    Unknown(String),
}

impl FieldKind {
    /// Stable tag used by the widget registry to pick a renderer.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Text => "text",
            FieldKind::RichText => "richtext",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::Choice(_) => "choice",
            FieldKind::List => "list",
            FieldKind::Date => "date",
            FieldKind::Unknown(_) => "unknown",
        }
    }
}

/// Per-property declaration of type, constraints and rendering hints.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    pub min_length: Option<usize>,
    pub unique_items: bool,
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn display_label(&self) -> String {
        if self.title.eq_ignore_ascii_case(&self.id) {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.id)
        }
    }
}

impl ContentSchema {
    pub fn is_required(&self, field_id: &str) -> bool {
        self.required.iter().any(|id| id == field_id)
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.properties.get(field_id)
    }
}
