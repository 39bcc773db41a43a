use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    presentation::{self, Screen, UiContext},
    store::ContentStore,
    toolbar::{PanelAction, PanelItem, PreferenceStore, Toolbar},
};

use super::{
    edit::{EditSession, Navigation},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
    view::{LayoutView, ViewPage},
};

const HELP_TEXT: &str = "Tab/Shift+Tab navigate • Ctrl+Tab switch fieldset • Ctrl+S save • \
     Ctrl+E visual mode • Ctrl+T menu • Ctrl+B toolbar • Ctrl+Q quit";

/// The interactive editor shell: one edit session at a time, the toolbar
/// rail, and the view page the app lands on after a successful save.
pub struct App {
    store: Box<dyn ContentStore>,
    session: Option<EditSession>,
    page: Option<ViewPage>,
    toolbar: Toolbar,
    status: StatusLine,
    options: UiOptions,
    last_saved: Option<IndexMap<String, Value>>,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(mut store: Box<dyn ContentStore>, path: &str, options: UiOptions) -> Result<Self> {
        let mut session = EditSession::begin(store.as_mut(), path, None)?;
        session
            .form
            .set_reset_after_submit(options.reset_after_submit);
        let prefs = PreferenceStore::new(&options.preferences_file);
        Ok(App {
            store,
            session: Some(session),
            page: None,
            toolbar: Toolbar::new(prefs),
            status: StatusLine::new(),
            options,
            last_saved: None,
            exit_armed: false,
            should_quit: false,
        })
    }

    /// Run the event loop. Returns the last successfully saved payload,
    /// or `None` when the user left without saving.
    pub fn run(&mut self) -> Result<Option<IndexMap<String, Value>>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        Ok(self.last_saved.take())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then_some(HELP_TEXT);
        let screen = match (&self.session, &self.page) {
            (Some(session), _) => Screen::Edit {
                form: &session.form,
                schema: &session.schema,
                title: &session.schema.title,
            },
            (None, Some(page)) => Screen::View { page },
            (None, None) => return,
        };
        presentation::draw(
            frame,
            UiContext {
                screen,
                toolbar: &self.toolbar,
                status_message: self.status.message(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.exit_armed = false;
                    self.on_save();
                    return;
                }
                KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Char('c')
                | KeyCode::Char('C') => {
                    self.on_exit();
                    return;
                }
                KeyCode::Char('e') | KeyCode::Char('E') => {
                    self.on_toggle_visual();
                    return;
                }
                KeyCode::Char('t') | KeyCode::Char('T') => {
                    self.on_toggle_menu("More");
                    return;
                }
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.on_toggle_menu("PersonalTools");
                    return;
                }
                KeyCode::Char('b') | KeyCode::Char('B') => {
                    if let Err(err) = self.toolbar.toggle_expanded() {
                        self.status.set_raw(err.to_string());
                    }
                    return;
                }
                KeyCode::Tab => {
                    if let Some(session) = &mut self.session {
                        let delta = if key.modifiers.contains(KeyModifiers::SHIFT) {
                            -1
                        } else {
                            1
                        };
                        session.form.focus_next_fieldset(delta);
                    }
                    self.exit_armed = false;
                    return;
                }
                _ => {}
            }
        }

        if self.toolbar.stack.is_shown() {
            self.handle_menu_key(key);
            return;
        }

        let Some(session) = &mut self.session else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                session.form.focus_next_field();
                self.exit_armed = false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                session.form.focus_prev_field();
                self.exit_armed = false;
            }
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status.ready();
            }
            _ => {
                let Some(field) = session.form.focused_field_mut() else {
                    return;
                };
                if field.handle_key(&key) {
                    let field_id = field.spec.id.clone();
                    let label = field.spec.display_label();
                    let value = field.candidate_value();
                    session.form.apply_edit(&field_id, value);
                    self.exit_armed = false;
                    self.status.editing(&label);
                }
            }
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.toolbar.stack.unload_panel();
                if self.toolbar.stack.entries().is_empty() {
                    self.toolbar.stack.close();
                    self.status.ready();
                }
            }
            KeyCode::Up => {
                if let Some(top) = self.toolbar.stack.top_mut() {
                    top.select_prev();
                }
            }
            KeyCode::Down => {
                if let Some(top) = self.toolbar.stack.top_mut() {
                    top.select_next();
                }
            }
            KeyCode::Enter => {
                let action = self
                    .toolbar
                    .stack
                    .top()
                    .and_then(|top| top.selected_item())
                    .map(|item| item.action.clone());
                if let Some(action) = action {
                    self.activate(action);
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self, action: PanelAction) {
        match action {
            PanelAction::Push(name) => self.push_panel(&name),
            PanelAction::Navigate(route) => {
                self.toolbar.stack.close();
                // Routing is owned by the host application; surface the
                // intent instead of resolving it here.
                self.status.set_raw(format!("Navigate to {route}"));
            }
            PanelAction::Revert(version) => self.on_revert(version),
            PanelAction::SetLayout(layout) => self.on_set_layout(&layout),
            PanelAction::Inert => {}
        }
    }

    fn on_toggle_menu(&mut self, selector: &str) {
        match self.toolbar.stack.toggle_menu(selector) {
            Ok(()) => {
                if self.toolbar.stack.is_shown() {
                    self.settle_panel_loads();
                    self.status.menu_opened(selector);
                } else {
                    self.status.ready();
                }
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    fn push_panel(&mut self, name: &str) {
        match self.toolbar.stack.load_panel(name) {
            Ok(()) => {
                self.settle_panel_loads();
                self.status.menu_opened(name);
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    /// Apply outstanding panel loads and fill data-driven panels. Loads
    /// are requested and completed in two steps; in-process resolution
    /// settles immediately.
    fn settle_panel_loads(&mut self) {
        for name in self.toolbar.stack.complete_loads() {
            self.populate_panel(&name);
        }
    }

    fn populate_panel(&mut self, name: &str) {
        match name {
            "History" => {
                let path = self.current_path();
                let items = match self.store.get_history(&path) {
                    Ok(entries) => entries
                        .iter()
                        .map(|entry| {
                            PanelItem::new(
                                format!("Version {}", entry.version),
                                PanelAction::Revert(entry.version),
                            )
                        })
                        .collect(),
                    Err(err) => {
                        self.status.set_raw(err.to_string());
                        Vec::new()
                    }
                };
                if let Some(top) = self.toolbar.stack.top_mut() {
                    top.panel.items = items;
                }
            }
            "Display" => {
                let layouts = self
                    .session
                    .as_ref()
                    .map(|session| session.schema.layouts.clone())
                    .unwrap_or_default();
                let items = layouts
                    .into_iter()
                    .map(|layout| {
                        let label = LayoutView::for_layout(Some(&layout)).label();
                        PanelItem::new(label, PanelAction::SetLayout(layout))
                    })
                    .collect();
                if let Some(top) = self.toolbar.stack.top_mut() {
                    top.panel.items = items;
                }
            }
            _ => {}
        }
    }

    fn on_save(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.submit(self.store.as_mut()) {
            Navigation::To(destination) => {
                self.last_saved = Some(session.form.values().clone());
                self.status.saved(&session.path);
                self.navigate(&destination);
            }
            Navigation::Stay => {
                let count = session.form.error_count();
                if count > 0 {
                    self.status.issues_remaining(count);
                } else if let Some(message) = session.form.top_error() {
                    let message = message.to_string();
                    self.status.set_raw(message);
                }
            }
        }
    }

    fn navigate(&mut self, destination: &str) {
        match self.store.get_content(destination) {
            Ok(content) => {
                self.page = Some(ViewPage::from_content(destination, &content));
                self.session = None;
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    fn on_revert(&mut self, version: u64) {
        let path = self.current_path();
        if let Err(err) = self.store.revert_history(&path, version) {
            self.status.set_raw(err.to_string());
            return;
        }
        self.toolbar.stack.close();
        match EditSession::begin(self.store.as_mut(), &path, None) {
            Ok(session) => {
                self.session = Some(session);
                self.page = None;
                self.status.set_raw(format!("Reverted to version {version}"));
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    fn on_set_layout(&mut self, layout: &str) {
        let path = self.current_path();
        let mut payload = IndexMap::new();
        payload.insert("layout".to_string(), Value::String(layout.to_string()));
        match self.store.update_content(&path, &payload) {
            Ok(()) => {
                self.toolbar.stack.close();
                self.status
                    .set_raw(format!("Layout set to {}", LayoutView::for_layout(Some(layout)).label()));
            }
            Err(err) => self.status.set_raw(err.to_string()),
        }
    }

    fn on_toggle_visual(&mut self) {
        if let Some(session) = &mut self.session {
            session.form.toggle_mode();
        } else if let Some(page) = self.page.take() {
            // Re-open the editor from the view page.
            match EditSession::begin(self.store.as_mut(), &page.path, None) {
                Ok(session) => self.session = Some(session),
                Err(err) => {
                    self.status.set_raw(err.to_string());
                    self.page = Some(page);
                }
            }
        }
    }

    fn on_exit(&mut self) {
        let dirty = self
            .session
            .as_ref()
            .is_some_and(|session| session.form.is_dirty());
        if self.options.confirm_exit && dirty && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn current_path(&self) -> String {
        self.session
            .as_ref()
            .map(|session| session.path.clone())
            .or_else(|| self.page.as_ref().map(|page| page.path.clone()))
            .unwrap_or_else(|| "/".to_string())
    }
}
