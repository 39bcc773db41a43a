use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde_json::Value;

use super::schema::{ContentSchema, FieldKind, FieldSpec, Fieldset};

/// Parse a JSON content schema (fieldsets, properties, required) into the
/// internal `ContentSchema`.
///
/// Every field id referenced by a fieldset or by `required` must exist in
/// `properties`; dangling references are a parse error rather than a
/// render-time surprise.
pub fn parse_content_schema(value: &Value) -> Result<ContentSchema> {
    let object = value
        .as_object()
        .context("content schema must be a JSON object")?;

    let mut properties = IndexMap::new();
    if let Some(map) = object.get("properties").and_then(Value::as_object) {
        for (id, spec) in map {
            properties.insert(id.clone(), parse_field_spec(id, spec));
        }
    }

    let mut fieldsets = Vec::new();
    if let Some(items) = object.get("fieldsets").and_then(Value::as_array) {
        for (index, item) in items.iter().enumerate() {
            fieldsets.push(parse_fieldset(index, item)?);
        }
    }
    if fieldsets.is_empty() && !properties.is_empty() {
        fieldsets.push(Fieldset {
            id: "default".to_string(),
            title: "Default".to_string(),
            fields: properties.keys().cloned().collect(),
        });
    }

    let required = string_list(object.get("required"));
    let layouts = string_list(object.get("layouts"));

    for fieldset in &fieldsets {
        for field_id in &fieldset.fields {
            if !properties.contains_key(field_id) {
                bail!(
                    "fieldset '{}' references unknown field '{field_id}'",
                    fieldset.id
                );
            }
        }
    }
    for field_id in &required {
        if !properties.contains_key(field_id) {
            bail!("required list references unknown field '{field_id}'");
        }
    }

    Ok(ContentSchema {
        title: object
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        description: object
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        fieldsets,
        properties,
        required,
        layouts,
    })
}

fn parse_fieldset(index: usize, value: &Value) -> Result<Fieldset> {
    let object = value
        .as_object()
        .with_context(|| format!("fieldset #{index} must be an object"))?;
    let id = object
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("default")
        .to_string();
    let title = object
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| id.clone());
    Ok(Fieldset {
        id,
        title,
        fields: string_list(object.get("fields")),
    })
}

fn parse_field_spec(id: &str, value: &Value) -> FieldSpec {
    let object = value.as_object();
    let get = |key: &str| object.and_then(|map| map.get(key));

    let title = get("title")
        .and_then(Value::as_str)
        .unwrap_or(id)
        .to_string();
    let description = get("description")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    let min_length = get("minLength")
        .and_then(Value::as_u64)
        .map(|len| len as usize);
    let unique_items = get("uniqueItems").and_then(Value::as_bool).unwrap_or(false);
    let default = get("default").cloned();

    let widget = get("widget").and_then(Value::as_str);
    let declared_type = get("type").and_then(Value::as_str);
    let choices = get("choices")
        .or_else(|| get("enum"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

    let kind = resolve_kind(widget, declared_type, choices);

    FieldSpec {
        id: id.to_string(),
        title,
        description,
        kind,
        min_length,
        unique_items,
        default,
    }
}

/// The widget hint wins over the declared type; anything unrecognized
/// falls back to `Unknown`, which renders as free text.
fn resolve_kind(
    widget: Option<&str>,
    declared_type: Option<&str>,
    choices: Option<Vec<String>>,
) -> FieldKind {
    match widget {
        Some("richtext") => return FieldKind::RichText,
        Some("textarea") => return FieldKind::Text,
        Some("date" | "datetime") => return FieldKind::Date,
        _ => {}
    }
    if let Some(options) = choices {
        return FieldKind::Choice(options);
    }
    match declared_type {
        Some("string") | None => FieldKind::String,
        Some("boolean") => FieldKind::Boolean,
        Some("integer") => FieldKind::Integer,
        Some("number") => FieldKind::Number,
        Some("array") => FieldKind::List,
        Some(other) => FieldKind::Unknown(other.to_string()),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
