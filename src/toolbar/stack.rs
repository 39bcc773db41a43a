use std::collections::VecDeque;

use super::registry::{Panel, PanelRegistry};

#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarError {
    pub message: String,
}

impl ToolbarError {
    fn unknown_panel(name: &str) -> Self {
        ToolbarError {
            message: format!("unknown toolbar panel '{name}'"),
        }
    }
}

impl std::fmt::Display for ToolbarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ToolbarError {}

/// One open panel. `slot` is recorded when the load is requested and
/// determines the panel's horizontal offset (slot × full panel width),
/// producing the sliding drill-down effect.
#[derive(Debug, Clone)]
pub struct PanelEntry {
    pub name: String,
    pub slot: usize,
    pub panel: Panel,
    pub selected: usize,
}

impl PanelEntry {
    pub fn select_next(&mut self) {
        if self.panel.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.panel.items.len();
    }

    pub fn select_prev(&mut self) {
        if self.panel.items.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.panel.items.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_item(&self) -> Option<&super::registry::PanelItem> {
        self.panel.items.get(self.selected)
    }
}

#[derive(Debug, Clone)]
struct PendingLoad {
    name: String,
    slot: usize,
    generation: u64,
}

/// Ordered stack of nested menu panels. Push-only append with pop-last
/// removal; lower panels keep their state while a deeper panel is open.
///
/// Loading is split into request (`load_panel`) and completion
/// (`complete_next_load`) so a load that finishes after the menu was
/// closed can be detected and dropped: closing bumps the stack generation
/// and completions are applied only when their recorded generation still
/// matches.
#[derive(Debug)]
pub struct PanelStack {
    entries: Vec<PanelEntry>,
    pending: VecDeque<PendingLoad>,
    shown: bool,
    generation: u64,
    registry: PanelRegistry,
}

impl PanelStack {
    pub fn new(registry: PanelRegistry) -> Self {
        PanelStack {
            entries: Vec::new(),
            pending: VecDeque::new(),
            shown: false,
            generation: 0,
            registry,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn entries(&self) -> &[PanelEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn top(&self) -> Option<&PanelEntry> {
        self.entries.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut PanelEntry> {
        self.entries.last_mut()
    }

    /// Show the menu with `selector` as the first panel, or close the menu
    /// if it is already shown.
    pub fn toggle_menu(&mut self, selector: &str) -> Result<(), ToolbarError> {
        if self.shown {
            self.close();
            return Ok(());
        }
        self.shown = true;
        self.load_panel(selector)
    }

    /// Close the menu. In-flight loads cannot be cancelled; bumping the
    /// generation turns their completions into no-ops instead.
    pub fn close(&mut self) {
        self.shown = false;
        self.entries.clear();
        self.generation += 1;
    }

    /// Request a panel load. Re-requesting the panel already at the top of
    /// the stack is a no-op; unknown names are an explicit error rather
    /// than a silently dropped load.
    pub fn load_panel(&mut self, name: &str) -> Result<(), ToolbarError> {
        let top_of_stack = self
            .pending
            .iter()
            .rev()
            .find(|load| load.generation == self.generation)
            .map(|load| load.name.as_str())
            .or_else(|| self.top().map(|entry| entry.name.as_str()));
        if top_of_stack == Some(name) {
            return Ok(());
        }
        if !self.registry.contains(name) {
            return Err(ToolbarError::unknown_panel(name));
        }
        let live_pending = self
            .pending
            .iter()
            .filter(|load| load.generation == self.generation)
            .count();
        let slot = self.entries.len() + live_pending;
        self.pending.push_back(PendingLoad {
            name: name.to_string(),
            slot,
            generation: self.generation,
        });
        Ok(())
    }

    /// Apply the oldest outstanding load. Returns the pushed entry's name,
    /// or `None` when there was nothing to do or the load went stale.
    pub fn complete_next_load(&mut self) -> Option<String> {
        loop {
            let load = self.pending.pop_front()?;
            if load.generation != self.generation {
                continue;
            }
            let Some(panel) = self.registry.resolve(&load.name) else {
                continue;
            };
            self.entries.push(PanelEntry {
                name: load.name.clone(),
                slot: load.slot,
                panel,
                selected: 0,
            });
            return Some(load.name);
        }
    }

    /// Drain every outstanding load in request order.
    pub fn complete_loads(&mut self) -> Vec<String> {
        let mut completed = Vec::new();
        while let Some(name) = self.complete_next_load() {
            completed.push(name);
        }
        completed
    }

    /// Pop the last panel (back navigation within the nested menu).
    pub fn unload_panel(&mut self) -> Option<PanelEntry> {
        self.entries.pop()
    }
}
