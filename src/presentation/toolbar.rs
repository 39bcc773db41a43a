use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::toolbar::{PanelEntry, Toolbar};

pub const EXPANDED_WIDTH: u16 = 22;
pub const COLLAPSED_WIDTH: u16 = 4;

pub fn rail_width(toolbar: &Toolbar) -> u16 {
    if toolbar.is_expanded() {
        EXPANDED_WIDTH
    } else {
        COLLAPSED_WIDTH
    }
}

pub fn render_rail(frame: &mut Frame<'_>, area: Rect, toolbar: &Toolbar) {
    let actions: [(&str, &str); 5] = [
        ("✎", "Edit"),
        ("▤", "Contents"),
        ("+", "Add"),
        ("⋯", "More  (Ctrl+T)"),
        ("◉", "Tools (Ctrl+P)"),
    ];
    let lines: Vec<Line<'static>> = actions
        .iter()
        .map(|(glyph, label)| {
            if toolbar.is_expanded() {
                Line::from(format!("{glyph} {label}"))
            } else {
                Line::from(glyph.to_string())
            }
        })
        .collect();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .title(if toolbar.is_expanded() { "Toolbar" } else { "" });
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the open panel stack as a horizontal slide: each panel sits at
/// `slot × panel width` inside a strip that is shifted left so the newest
/// panel lands in view.
pub fn render_panels(frame: &mut Frame<'_>, area: Rect, toolbar: &Toolbar) {
    let entries = toolbar.stack.entries();
    let Some(top) = entries.last() else {
        return;
    };
    let shift = (entries.len() - 1) as i32;
    for entry in entries {
        let offset = entry.slot as i32 - shift;
        if offset != 0 {
            // Off-screen panel in the strip; it keeps its state but has
            // no visible cells to draw into.
            continue;
        }
        render_panel(frame, area, entry, entry.name == top.name);
    }
}

fn render_panel(frame: &mut Frame<'_>, area: Rect, entry: &PanelEntry, focused: bool) {
    let width = area.width.min(34).max(16);
    let panel_area = Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    };
    frame.render_widget(Clear, panel_area);

    let items: Vec<ListItem<'static>> = if entry.panel.items.is_empty() {
        vec![ListItem::new("(empty)")]
    } else {
        entry
            .panel
            .items
            .iter()
            .map(|item| ListItem::new(item.label.clone()))
            .collect()
    };
    let mut state = ListState::default();
    if !entry.panel.items.is_empty() {
        state.select(Some(entry.selected.min(entry.panel.items.len() - 1)));
    }

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(entry.panel.title.clone())
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, panel_area, &mut state);
}
