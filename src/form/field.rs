use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};

use crate::domain::{FieldKind, FieldSpec};

/// Interactive value buffer for one schema property. One variant per
/// rendering strategy; unknown field kinds fall back to `Text`.
#[derive(Debug, Clone)]
pub enum WidgetValue {
    Text(String),
    Rich(String),
    Bool(bool),
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
    },
    List(String),
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub required: bool,
    pub widget: WidgetValue,
}

impl FieldState {
    pub fn from_spec(spec: FieldSpec, required: bool) -> Self {
        let widget = match &spec.kind {
            FieldKind::Boolean => {
                let default = spec
                    .default
                    .as_ref()
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                WidgetValue::Bool(default)
            }
            FieldKind::Choice(options) => {
                let selected = spec
                    .default
                    .as_ref()
                    .and_then(Value::as_str)
                    .and_then(|value| options.iter().position(|option| option == value));
                WidgetValue::Choice {
                    options: options.clone(),
                    selected,
                }
            }
            FieldKind::List => WidgetValue::List(default_text(&spec)),
            FieldKind::RichText => WidgetValue::Rich(default_text(&spec)),
            _ => WidgetValue::Text(default_text(&spec)),
        };
        FieldState {
            spec,
            required,
            widget,
        }
    }

    /// Reseed the edit buffer from an incoming content value.
    pub fn seed(&mut self, value: &Value) {
        match (&mut self.widget, value) {
            (WidgetValue::Text(buffer), _) => *buffer = value_to_text(value),
            (WidgetValue::Rich(buffer), Value::Object(map)) => {
                *buffer = map
                    .get("data")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
            }
            (WidgetValue::Rich(buffer), _) => *buffer = value_to_text(value),
            (WidgetValue::Bool(flag), Value::Bool(incoming)) => *flag = *incoming,
            (WidgetValue::Bool(_), _) => {}
            (WidgetValue::Choice { options, selected }, Value::String(incoming)) => {
                *selected = options.iter().position(|option| option == incoming);
            }
            (WidgetValue::Choice { selected, .. }, Value::Null) => *selected = None,
            (WidgetValue::Choice { .. }, _) => {}
            (WidgetValue::List(buffer), Value::Array(items)) => {
                *buffer = items
                    .iter()
                    .map(value_to_text)
                    .collect::<Vec<_>>()
                    .join(", ");
            }
            (WidgetValue::List(buffer), _) => *buffer = value_to_text(value),
        }
    }

    /// Apply a key press to the edit buffer. Returns `true` when the
    /// buffer changed; the caller then feeds `candidate_value` through the
    /// form reducer so every mutation takes the same path.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match &mut self.widget {
            WidgetValue::Text(buffer) => match key.code {
                KeyCode::Left => adjust_numeric(buffer, &self.spec.kind, -1),
                KeyCode::Right => adjust_numeric(buffer, &self.spec.kind, 1),
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        return false;
                    }
                    buffer.push(c);
                    true
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    true
                }
                KeyCode::Delete => {
                    buffer.clear();
                    true
                }
                _ => false,
            },
            WidgetValue::Rich(buffer) | WidgetValue::List(buffer) => match key.code {
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        return false;
                    }
                    buffer.push(c);
                    true
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    true
                }
                KeyCode::Delete => {
                    buffer.clear();
                    true
                }
                _ => false,
            },
            WidgetValue::Bool(flag) => match key.code {
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    *flag = !*flag;
                    true
                }
                _ => false,
            },
            WidgetValue::Choice { options, selected } => match key.code {
                KeyCode::Up | KeyCode::Left => {
                    if options.is_empty() {
                        return false;
                    }
                    *selected = Some(match *selected {
                        Some(0) | None => options.len() - 1,
                        Some(index) => index - 1,
                    });
                    true
                }
                KeyCode::Down | KeyCode::Right => {
                    if options.is_empty() {
                        return false;
                    }
                    *selected = Some(match *selected {
                        Some(index) => (index + 1) % options.len(),
                        None => 0,
                    });
                    true
                }
                _ => false,
            },
        }
    }

    /// The value this field currently contributes to the candidate payload.
    pub fn candidate_value(&self) -> Value {
        match &self.widget {
            WidgetValue::Text(buffer) => match &self.spec.kind {
                FieldKind::Integer => buffer
                    .trim()
                    .parse::<i64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(buffer.clone())),
                FieldKind::Number => buffer
                    .trim()
                    .parse::<f64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(buffer.clone())),
                _ => Value::String(buffer.clone()),
            },
            WidgetValue::Rich(buffer) => {
                if buffer.is_empty() {
                    Value::Null
                } else {
                    json!({
                        "content-type": "text/html",
                        "data": buffer,
                        "encoding": "utf8",
                    })
                }
            }
            WidgetValue::Bool(flag) => Value::Bool(*flag),
            WidgetValue::Choice { options, selected } => selected
                .and_then(|index| options.get(index))
                .map(|option| Value::String(option.clone()))
                .unwrap_or(Value::Null),
            WidgetValue::List(buffer) => {
                let items: Vec<Value> = buffer
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::String(item.to_string()))
                    .collect();
                Value::Array(items)
            }
        }
    }

    pub fn display_value(&self) -> String {
        match &self.widget {
            WidgetValue::Text(buffer) | WidgetValue::Rich(buffer) => buffer.clone(),
            WidgetValue::Bool(flag) => flag.to_string(),
            WidgetValue::Choice { options, selected } => selected
                .and_then(|index| options.get(index))
                .cloned()
                .unwrap_or_else(|| "<none>".to_string()),
            WidgetValue::List(buffer) => format!("[{}]", buffer.trim()),
        }
    }
}

fn default_text(spec: &FieldSpec) -> String {
    spec.default.as_ref().map(value_to_text).unwrap_or_default()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn adjust_numeric(buffer: &mut String, kind: &FieldKind, delta: i64) -> bool {
    match kind {
        FieldKind::Integer => {
            let current = buffer.trim().parse::<i64>().unwrap_or(0);
            *buffer = current.saturating_add(delta).to_string();
            true
        }
        FieldKind::Number => {
            let current = buffer.trim().parse::<f64>().unwrap_or(0.0);
            *buffer = (current + delta as f64).to_string();
            true
        }
        _ => false,
    }
}
