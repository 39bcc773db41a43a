mod components;
mod toolbar;
mod views;
mod widgets;

pub use widgets::{WidgetRegistry, WidgetRenderer};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    app::ViewPage,
    domain::ContentSchema,
    form::FormState,
    toolbar::Toolbar as ToolbarState,
};

pub enum Screen<'a> {
    Edit {
        form: &'a FormState,
        schema: &'a ContentSchema,
        title: &'a str,
    },
    View {
        page: &'a ViewPage,
    },
}

pub struct UiContext<'a> {
    pub screen: Screen<'a>,
    pub toolbar: &'a ToolbarState,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(toolbar::rail_width(ctx.toolbar)),
            Constraint::Min(1),
        ])
        .split(frame.area());
    toolbar::render_rail(frame, columns[0], ctx.toolbar);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(columns[1]);

    match &ctx.screen {
        Screen::Edit {
            form,
            schema,
            title,
        } => components::render_form(frame, rows[0], form, schema, title),
        Screen::View { page } => views::render_page(frame, rows[0], page),
    }
    components::render_footer(frame, rows[1], &ctx);

    if ctx.toolbar.stack.is_shown() {
        toolbar::render_panels(frame, rows[0], ctx.toolbar);
    }
}
