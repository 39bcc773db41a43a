use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};

use crate::{
    domain::{FieldKind, FieldSpec},
    form::{FieldState, WidgetValue},
};

fn mk_field(kind: FieldKind) -> FieldState {
    FieldState::from_spec(
        FieldSpec {
            id: "field".to_string(),
            title: "Field".to_string(),
            description: None,
            kind,
            min_length: None,
            unique_items: false,
            default: None,
        },
        false,
    )
}

fn press(field: &mut FieldState, code: KeyCode) -> bool {
    field.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(field: &mut FieldState, text: &str) {
    for c in text.chars() {
        press(field, KeyCode::Char(c));
    }
}

#[test]
fn text_input_edits_the_buffer() {
    let mut field = mk_field(FieldKind::String);
    type_text(&mut field, "abc");
    assert_eq!(field.candidate_value(), json!("abc"));
    press(&mut field, KeyCode::Backspace);
    assert_eq!(field.candidate_value(), json!("ab"));
    press(&mut field, KeyCode::Delete);
    assert_eq!(field.candidate_value(), json!(""));
}

#[test]
fn control_chords_do_not_reach_the_buffer() {
    let mut field = mk_field(FieldKind::String);
    let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert!(!field.handle_key(&chord));
    assert_eq!(field.candidate_value(), json!(""));
}

#[test]
fn integer_arrows_step_the_value() {
    let mut field = mk_field(FieldKind::Integer);
    type_text(&mut field, "41");
    press(&mut field, KeyCode::Right);
    assert_eq!(field.candidate_value(), json!(42));
    press(&mut field, KeyCode::Left);
    assert_eq!(field.candidate_value(), json!(41));
}

#[test]
fn unparseable_number_stays_a_string() {
    let mut field = mk_field(FieldKind::Integer);
    type_text(&mut field, "4x");
    assert_eq!(field.candidate_value(), json!("4x"));
}

#[test]
fn boolean_toggles_on_space() {
    let mut field = mk_field(FieldKind::Boolean);
    assert_eq!(field.candidate_value(), json!(false));
    press(&mut field, KeyCode::Char(' '));
    assert_eq!(field.candidate_value(), json!(true));
}

#[test]
fn choice_cycles_through_the_options() {
    let mut field = mk_field(FieldKind::Choice(vec![
        "en".to_string(),
        "de".to_string(),
        "fr".to_string(),
    ]));
    assert_eq!(field.candidate_value(), Value::Null);
    press(&mut field, KeyCode::Down);
    assert_eq!(field.candidate_value(), json!("en"));
    press(&mut field, KeyCode::Up);
    assert_eq!(field.candidate_value(), json!("fr"));
}

#[test]
fn empty_rich_text_contributes_null() {
    let field = mk_field(FieldKind::RichText);
    assert_eq!(field.candidate_value(), Value::Null);
}

#[test]
fn rich_text_wraps_the_buffer_in_the_wire_shape() {
    let mut field = mk_field(FieldKind::RichText);
    type_text(&mut field, "<p>hi</p>");
    assert_eq!(
        field.candidate_value(),
        json!({
            "content-type": "text/html",
            "data": "<p>hi</p>",
            "encoding": "utf8",
        })
    );
}

#[test]
fn rich_text_seeds_from_the_wire_shape() {
    let mut field = mk_field(FieldKind::RichText);
    field.seed(&json!({
        "content-type": "text/html",
        "data": "<p>body</p>",
        "encoding": "utf8",
    }));
    match &field.widget {
        WidgetValue::Rich(buffer) => assert_eq!(buffer, "<p>body</p>"),
        other => panic!("expected rich widget, got {other:?}"),
    }
}

#[test]
fn list_buffer_splits_on_commas_and_keeps_duplicates() {
    let mut field = mk_field(FieldKind::List);
    type_text(&mut field, "news, events, , news");
    assert_eq!(field.candidate_value(), json!(["news", "events", "news"]));
}

#[test]
fn list_seeds_back_into_a_comma_buffer() {
    let mut field = mk_field(FieldKind::List);
    field.seed(&json!(["a", "b"]));
    assert_eq!(field.candidate_value(), json!(["a", "b"]));
    assert_eq!(field.display_value(), "[a, b]");
}
