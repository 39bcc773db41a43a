use std::collections::HashMap;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::form::{FieldState, WidgetValue};

/// Renders one field's value area. Strategies are looked up by the field
/// kind's tag; unknown kinds fall back to the plain text renderer, so a
/// new widget only needs a registry entry, not engine changes.
pub type WidgetRenderer = fn(&FieldState, bool, usize) -> Vec<Line<'static>>;

pub struct WidgetRegistry {
    renderers: HashMap<&'static str, WidgetRenderer>,
    fallback: WidgetRenderer,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        let mut registry = WidgetRegistry {
            renderers: HashMap::new(),
            fallback: render_text,
        };
        registry.register("string", render_text);
        registry.register("text", render_text);
        registry.register("unknown", render_text);
        registry.register("integer", render_text);
        registry.register("number", render_text);
        registry.register("date", render_date);
        registry.register("richtext", render_rich_text);
        registry.register("boolean", render_boolean);
        registry.register("choice", render_choice);
        registry.register("list", render_list);
        registry
    }
}

impl WidgetRegistry {
    pub fn register(&mut self, tag: &'static str, renderer: WidgetRenderer) {
        self.renderers.insert(tag, renderer);
    }

    pub fn render(&self, field: &FieldState, selected: bool, max_width: usize) -> Vec<Line<'static>> {
        let renderer = self
            .renderers
            .get(field.spec.kind.tag())
            .copied()
            .unwrap_or(self.fallback);
        renderer(field, selected, max_width)
    }
}

fn value_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn value_line(text: String, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "› " } else { "  " };
    vec![Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(text, value_style(selected)),
    ])]
}

fn render_text(field: &FieldState, selected: bool, max_width: usize) -> Vec<Line<'static>> {
    value_line(clamp_cells(&field.display_value(), max_width), selected)
}

fn render_date(field: &FieldState, selected: bool, max_width: usize) -> Vec<Line<'static>> {
    let mut text = clamp_cells(&field.display_value(), max_width.saturating_sub(13));
    if text.is_empty() {
        text.push_str("YYYY-MM-DD");
    }
    value_line(text, selected)
}

fn render_rich_text(field: &FieldState, selected: bool, max_width: usize) -> Vec<Line<'static>> {
    let body = field.display_value();
    if body.is_empty() {
        return value_line(String::new(), selected);
    }
    textwrap::wrap(&body, max_width.max(8))
        .into_iter()
        .flat_map(|wrapped| value_line(wrapped.into_owned(), selected))
        .collect()
}

fn render_boolean(field: &FieldState, selected: bool, _max_width: usize) -> Vec<Line<'static>> {
    let flag = matches!(field.widget, WidgetValue::Bool(true));
    let text = format!("[{}] {}", if flag { "x" } else { " " }, flag);
    value_line(text, selected)
}

fn render_choice(field: &FieldState, selected: bool, max_width: usize) -> Vec<Line<'static>> {
    let text = format!("‹ {} ›", clamp_cells(&field.display_value(), max_width.saturating_sub(4)));
    value_line(text, selected)
}

fn render_list(field: &FieldState, selected: bool, max_width: usize) -> Vec<Line<'static>> {
    value_line(clamp_cells(&field.display_value(), max_width), selected)
}

/// Clamp to terminal cells, not chars, so wide glyphs don't overflow the
/// value box.
fn clamp_cells(value: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    let mut result = String::new();
    let mut used = 0usize;
    for ch in value.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_cells {
            result.pop();
            result.push('…');
            return result;
        }
        result.push(ch);
        used += width;
    }
    result
}
