use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::{ContentSchema, FieldKind};

pub const REQUIRED_MESSAGE: &str = "Required input is missing.";
pub const UNIQUE_ITEMS_MESSAGE: &str = "Items must be unique.";
pub const ERROR_SUMMARY_MESSAGE: &str = "There were some errors.";

pub fn min_length_message(len: usize) -> String {
    format!("Minimum length is {len}.")
}

/// Submit-time validation: walk fieldsets and their fields in declared
/// order and collect every violation, keyed by field id. Nothing here
/// mutates the candidate payload.
pub fn validate(
    schema: &ContentSchema,
    values: &IndexMap<String, Value>,
) -> IndexMap<String, Vec<String>> {
    let mut errors: IndexMap<String, Vec<String>> = IndexMap::new();

    for fieldset in &schema.fieldsets {
        for field_id in &fieldset.fields {
            let Some(spec) = schema.field(field_id) else {
                continue;
            };
            let value = values.get(field_id).unwrap_or(&Value::Null);

            if schema.is_required(field_id)
                && spec.kind != FieldKind::Boolean
                && is_falsy(value)
            {
                errors
                    .entry(field_id.clone())
                    .or_default()
                    .push(REQUIRED_MESSAGE.to_string());
            }

            // An absent value with a length constraint is not a violation;
            // the required check above already covers mandatory fields.
            if let Some(min) = spec.min_length {
                if let Some(len) = value_length(value) {
                    if len < min {
                        errors
                            .entry(field_id.clone())
                            .or_default()
                            .push(min_length_message(min));
                    }
                }
            }

            if spec.unique_items {
                if let Value::Array(items) = value {
                    if has_duplicates(items) {
                        errors
                            .entry(field_id.clone())
                            .or_default()
                            .push(UNIQUE_ITEMS_MESSAGE.to_string());
                    }
                }
            }
        }
    }

    errors
}

/// The empty marker the reducer stores for cleared fields, plus the other
/// values that count as "no input": `false`, `""` and `0`.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Number(num) => num.as_f64() == Some(0.0),
        _ => false,
    }
}

fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn has_duplicates(items: &[Value]) -> bool {
    let mut seen: Vec<&Value> = Vec::with_capacity(items.len());
    for item in items {
        if seen.contains(&item) {
            return true;
        }
        seen.push(item);
    }
    false
}
