mod prefs;
mod registry;
mod stack;

pub use prefs::{FAR_FUTURE_EXPIRY_SECS, PreferenceStore, TOOLBAR_EXPANDED_KEY};
pub use registry::{Panel, PanelAction, PanelItem, PanelRegistry};
pub use stack::{PanelEntry, PanelStack, ToolbarError};

use anyhow::Result;

/// The persistent toolbar shell: the expanded/collapsed rail plus the
/// stack of lazily-loaded menu panels.
#[derive(Debug)]
pub struct Toolbar {
    pub stack: PanelStack,
    expanded: bool,
    prefs: PreferenceStore,
}

impl Toolbar {
    pub fn new(prefs: PreferenceStore) -> Self {
        let expanded = prefs.toolbar_expanded();
        Toolbar {
            stack: PanelStack::new(PanelRegistry::builtin()),
            expanded,
            prefs,
        }
    }

    pub fn with_registry(prefs: PreferenceStore, registry: PanelRegistry) -> Self {
        let expanded = prefs.toolbar_expanded();
        Toolbar {
            stack: PanelStack::new(registry),
            expanded,
            prefs,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the rail between expanded and collapsed and persist the choice
    /// with a far-future expiry so it survives across sessions.
    pub fn toggle_expanded(&mut self) -> Result<()> {
        self.expanded = !self.expanded;
        self.prefs.save_toolbar_expanded(self.expanded)
    }
}
