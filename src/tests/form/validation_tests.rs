use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::{
    domain::{ContentSchema, parse_content_schema},
    form::{REQUIRED_MESSAGE, UNIQUE_ITEMS_MESSAGE, is_falsy, min_length_message, validate},
};

fn document_schema() -> ContentSchema {
    parse_content_schema(&json!({
        "title": "Document",
        "fieldsets": [
            {"id": "default", "title": "Default", "fields": ["title", "description", "subjects"]}
        ],
        "properties": {
            "title": {"title": "Title", "type": "string", "minLength": 3},
            "description": {"title": "Summary", "type": "string", "minLength": 5},
            "subjects": {"title": "Tags", "type": "array", "uniqueItems": true}
        },
        "required": ["title"]
    }))
    .unwrap()
}

fn values(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

#[test]
fn missing_required_field_reports_exact_message() {
    let schema = document_schema();
    let errors = validate(&schema, &values(&[("title", Value::Null)]));
    assert_eq!(
        errors.get("title").map(Vec::as_slice),
        Some([REQUIRED_MESSAGE.to_string()].as_slice())
    );
}

#[test]
fn required_boolean_is_exempt_even_when_false() {
    let schema = parse_content_schema(&json!({
        "properties": {
            "agree": {"title": "Agree", "type": "boolean"}
        },
        "required": ["agree"]
    }))
    .unwrap();
    let errors = validate(&schema, &values(&[("agree", json!(false))]));
    assert!(errors.is_empty());
}

#[test]
fn short_value_reports_minimum_length() {
    let schema = document_schema();
    let errors = validate(&schema, &values(&[("title", json!("ab"))]));
    assert_eq!(
        errors.get("title").map(Vec::as_slice),
        Some([min_length_message(3)].as_slice())
    );
}

#[test]
fn absent_value_skips_the_length_check() {
    // "description" has minLength 5 but is optional; leaving it out must
    // not produce a length violation.
    let schema = document_schema();
    let errors = validate(&schema, &values(&[("title", json!("Launch"))]));
    assert!(errors.is_empty());
}

#[test]
fn missing_required_value_reports_only_the_required_violation() {
    let schema = document_schema();
    let errors = validate(&schema, &values(&[]));
    assert_eq!(
        errors.get("title").map(Vec::as_slice),
        Some([REQUIRED_MESSAGE.to_string()].as_slice())
    );
    assert_eq!(errors.len(), 1);
}

#[test]
fn duplicate_array_items_are_flagged() {
    let schema = document_schema();
    let errors = validate(
        &schema,
        &values(&[
            ("title", json!("Launch")),
            ("subjects", json!(["news", "events", "news"])),
        ]),
    );
    assert_eq!(
        errors.get("subjects").map(Vec::as_slice),
        Some([UNIQUE_ITEMS_MESSAGE.to_string()].as_slice())
    );
}

#[test]
fn distinct_array_items_pass() {
    let schema = document_schema();
    let errors = validate(
        &schema,
        &values(&[
            ("title", json!("Launch")),
            ("subjects", json!(["news", "events"])),
        ]),
    );
    assert!(errors.is_empty());
}

#[test]
fn empty_array_satisfies_a_required_field() {
    let schema = parse_content_schema(&json!({
        "properties": {
            "subjects": {"title": "Tags", "type": "array"}
        },
        "required": ["subjects"]
    }))
    .unwrap();
    let errors = validate(&schema, &values(&[("subjects", json!([]))]));
    assert!(errors.is_empty());
}

#[test]
fn errors_follow_the_declared_field_order() {
    let schema = document_schema();
    let errors = validate(
        &schema,
        &values(&[
            ("subjects", json!(["a", "a"])),
            ("description", json!("hey")),
            ("title", Value::Null),
        ]),
    );
    let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
    assert_eq!(keys, ["title", "description", "subjects"]);
}

#[test]
fn falsy_values_cover_the_empty_markers() {
    assert!(is_falsy(&Value::Null));
    assert!(is_falsy(&json!(false)));
    assert!(is_falsy(&json!("")));
    assert!(is_falsy(&json!(0)));
    assert!(!is_falsy(&json!("x")));
    assert!(!is_falsy(&json!([])));
    assert!(!is_falsy(&json!(1)));
}

#[test]
fn length_counts_characters_not_bytes() {
    let schema = document_schema();
    let errors = validate(&schema, &values(&[("title", json!("héé"))]));
    assert!(errors.is_empty());
}
