use serde_json::json;

use crate::domain::{FieldKind, parse_content_schema};

#[test]
fn dangling_fieldset_references_are_rejected() {
    let err = parse_content_schema(&json!({
        "fieldsets": [{"id": "default", "title": "Default", "fields": ["ghost"]}],
        "properties": {"title": {"title": "Title", "type": "string"}}
    }))
    .unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn dangling_required_references_are_rejected() {
    let err = parse_content_schema(&json!({
        "properties": {"title": {"title": "Title", "type": "string"}},
        "required": ["ghost"]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn a_default_fieldset_is_synthesized_when_none_declared() {
    let schema = parse_content_schema(&json!({
        "properties": {
            "title": {"title": "Title", "type": "string"},
            "description": {"title": "Summary", "type": "string"}
        }
    }))
    .unwrap();
    assert_eq!(schema.fieldsets.len(), 1);
    assert_eq!(schema.fieldsets[0].id, "default");
    assert_eq!(schema.fieldsets[0].fields, ["title", "description"]);
}

#[test]
fn widget_hints_override_the_declared_type() {
    let schema = parse_content_schema(&json!({
        "properties": {
            "text": {"title": "Text", "type": "string", "widget": "richtext"},
            "notes": {"title": "Notes", "type": "string", "widget": "textarea"},
            "effective": {"title": "Publishing date", "type": "string", "widget": "datetime"}
        }
    }))
    .unwrap();
    assert_eq!(schema.field("text").unwrap().kind, FieldKind::RichText);
    assert_eq!(schema.field("notes").unwrap().kind, FieldKind::Text);
    assert_eq!(schema.field("effective").unwrap().kind, FieldKind::Date);
}

#[test]
fn choices_win_over_the_declared_type() {
    let schema = parse_content_schema(&json!({
        "properties": {
            "language": {"title": "Language", "type": "string", "choices": ["en", "de"]},
            "state": {"title": "State", "enum": ["private", "published"]}
        }
    }))
    .unwrap();
    assert_eq!(
        schema.field("language").unwrap().kind,
        FieldKind::Choice(vec!["en".to_string(), "de".to_string()])
    );
    assert_eq!(
        schema.field("state").unwrap().kind,
        FieldKind::Choice(vec!["private".to_string(), "published".to_string()])
    );
}

#[test]
fn unknown_types_are_preserved_for_the_fallback_renderer() {
    let schema = parse_content_schema(&json!({
        "properties": {
            "blob": {"title": "Blob", "type": "mystery"}
        }
    }))
    .unwrap();
    assert_eq!(
        schema.field("blob").unwrap().kind,
        FieldKind::Unknown("mystery".to_string())
    );
}

#[test]
fn constraints_and_layouts_are_carried_through() {
    let schema = parse_content_schema(&json!({
        "title": "Document",
        "properties": {
            "title": {"title": "Title", "type": "string", "minLength": 3},
            "subjects": {"title": "Tags", "type": "array", "uniqueItems": true}
        },
        "required": ["title"],
        "layouts": ["document_view", "summary_view"]
    }))
    .unwrap();
    assert_eq!(schema.field("title").unwrap().min_length, Some(3));
    assert!(schema.field("subjects").unwrap().unique_items);
    assert!(schema.is_required("title"));
    assert!(!schema.is_required("subjects"));
    assert_eq!(schema.layouts, ["document_view", "summary_view"]);
}

#[test]
fn non_object_schemas_are_rejected() {
    assert!(parse_content_schema(&json!([1, 2, 3])).is_err());
}
