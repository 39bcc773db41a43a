use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};
use crate::{
    app::{LayoutView, ViewPage},
    form::{Block as ContentBlock, FormState},
};

/// Visual display mode: a fixed, ordered list of content blocks instead
/// of the schema-driven fieldset layout.
pub fn render_blocks(frame: &mut Frame<'_>, area: Rect, form: &FormState, title: &str) {
    let mut constraints: Vec<Constraint> = Vec::with_capacity(form.blocks.len() + 1);
    for block in &form.blocks {
        constraints.push(match block {
            ContentBlock::Title => Constraint::Length(3),
            ContentBlock::RichText { .. } => Constraint::Min(4),
        });
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, block) in form.blocks.iter().enumerate() {
        match block {
            ContentBlock::Title => {
                let text = form
                    .value("title")
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                let widget = Paragraph::new(text)
                    .style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                    .block(Block::default().borders(Borders::ALL).title(title.to_string()));
                frame.render_widget(widget, chunks[index]);
            }
            ContentBlock::RichText { .. } => {
                let html = block.html().unwrap_or_default();
                let width = chunks[index].width.saturating_sub(2).max(8) as usize;
                let lines: Vec<Line<'static>> = textwrap::wrap(&strip_tags(html), width)
                    .into_iter()
                    .map(|wrapped| Line::from(wrapped.into_owned()))
                    .collect();
                let widget =
                    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Text"));
                frame.render_widget(widget, chunks[index]);
            }
        }
    }
}

pub fn render_page(frame: &mut Frame<'_>, area: Rect, page: &ViewPage) {
    match page.layout {
        LayoutView::Summary => render_summary(frame, area, page),
        LayoutView::Tabular => render_tabular(frame, area, page),
        LayoutView::Document => render_document(frame, area, page),
    }
}

fn render_document(frame: &mut Frame<'_>, area: Rect, page: &ViewPage) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    let header = Paragraph::new(page.title.clone())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(page.path.clone()));
    frame.render_widget(header, chunks[0]);

    let mut body = String::new();
    if let Some(description) = &page.description {
        body.push_str(description);
        body.push_str("\n\n");
    }
    if let Some(html) = &page.body_html {
        body.push_str(&strip_tags(html));
    }
    let widget = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Document view"));
    frame.render_widget(widget, chunks[1]);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, page: &ViewPage) {
    let mut lines = vec![Line::from(page.title.clone())];
    if let Some(description) = &page.description {
        lines.push(Line::from(description.clone()));
    }
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Summary view"));
    frame.render_widget(widget, area);
}

fn render_tabular(frame: &mut Frame<'_>, area: Rect, page: &ViewPage) {
    let rows = vec![
        Row::new(vec!["title".to_string(), page.title.clone()]),
        Row::new(vec![
            "description".to_string(),
            page.description.clone().unwrap_or_default(),
        ]),
    ];
    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
        .header(Row::new(vec!["Field", "Value"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().borders(Borders::ALL).title("Tabular view"));
    frame.render_widget(table, area);
}

/// Minimal tag stripping for terminal display of rich-text bodies.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                if !text.ends_with(' ') && !text.is_empty() {
                    text.push(' ');
                }
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.trim().to_string()
}
