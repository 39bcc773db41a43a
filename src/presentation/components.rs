use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::{
    domain::ContentSchema,
    form::{DisplayMode, ERROR_SUMMARY_MESSAGE, FormState},
};

use super::{UiContext, views, widgets::WidgetRegistry};

pub fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &FormState,
    schema: &ContentSchema,
    title: &str,
) {
    if form.mode == DisplayMode::Blocks {
        views::render_blocks(frame, area, form, title);
        return;
    }

    let mut body = area;
    if let Some(message) = form.top_error() {
        body = render_banner(frame, body, "Error", message);
    }
    if form.has_errors() {
        body = render_banner(frame, body, "Error", ERROR_SUMMARY_MESSAGE);
    }

    if form.fieldsets.len() > 1 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(body);
        render_tabs(frame, chunks[0], form);
        render_fields(frame, chunks[1], form, schema, title);
    } else {
        render_fields(frame, body, form, schema, title);
    }
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut status = ctx.status_message.to_string();
    if let super::Screen::Edit { form, .. } = &ctx.screen {
        if form.is_dirty() {
            status.push_str(" • unsaved changes");
        }
        if form.error_count() > 0 {
            status.push_str(&format!(" • {} error(s)", form.error_count()));
        }
        if let Some(focused) = form.focused_field() {
            status.push_str(" • focus: ");
            status.push_str(&focused.spec.display_label());
        }
    }

    let status_widget = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_widget, chunks[0]);

    let help_widget = Paragraph::new(ctx.help.unwrap_or(" ").to_string())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(help_widget, chunks[1]);
}

/// Non-blocking banner above the field list; returns the remaining area.
fn render_banner(frame: &mut Frame<'_>, area: Rect, title: &str, message: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        );
    frame.render_widget(banner, chunks[0]);
    chunks[1]
}

fn render_tabs(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let titles: Vec<Line<'static>> = form
        .fieldsets
        .iter()
        .map(|fieldset| Line::from(fieldset.title.clone()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(form.fieldset_index)
        .block(Block::default().borders(Borders::ALL).title("Fieldsets"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_fields(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &FormState,
    _schema: &ContentSchema,
    title: &str,
) {
    let Some(fieldset) = form.active_fieldset() else {
        let placeholder = Paragraph::new("No editable fields in schema")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    };

    let registry = WidgetRegistry::default();
    let content_width = area.width.saturating_sub(6) as usize;
    let selected_index = form
        .field_index
        .min(fieldset.fields.len().saturating_sub(1));

    let mut items = Vec::with_capacity(fieldset.fields.len());
    for (index, field) in fieldset.fields.iter().enumerate() {
        let is_selected = index == selected_index;
        let mut lines = Vec::new();

        let mut label = field.spec.display_label();
        if field.required {
            label.push_str(" *");
        }
        let label_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(label, label_style)));

        lines.extend(registry.render(field, is_selected, content_width));

        let kind_label = field.spec.kind.tag();
        let caption = match &field.spec.description {
            Some(desc) => format!("{kind_label} | {desc}"),
            None => kind_label.to_string(),
        };
        lines.push(Line::from(Span::styled(
            format!("  {caption}"),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));

        for error in form.errors_for(&field.spec.id) {
            lines.push(Line::from(Span::styled(
                format!("  ⚠ {error}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        items.push(ListItem::new(lines));
    }

    let mut list_state = ListState::default();
    if !fieldset.fields.is_empty() {
        list_state.select(Some(selected_index));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("{title} — {}", fieldset.title))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);
}
