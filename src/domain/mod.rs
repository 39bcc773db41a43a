mod parser;
mod schema;

pub use parser::parse_content_schema;
pub use schema::{ContentSchema, FieldKind, FieldSpec, Fieldset};
