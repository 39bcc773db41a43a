use std::collections::HashMap;

use indexmap::IndexMap;

/// A contextual menu panel: a titled list of actions. Panels are plain
/// data; what happens on activation is decided by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub items: Vec<PanelItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelItem {
    pub label: String,
    pub action: PanelAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    /// Drill down into another panel by registry name.
    Push(String),
    /// Leave the menu and go to a route.
    Navigate(String),
    /// Revert the content to a recorded version.
    Revert(u64),
    /// Switch the content's display layout.
    SetLayout(String),
    Inert,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Panel {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<PanelItem>) -> Self {
        self.items = items;
        self
    }
}

impl PanelItem {
    pub fn new(label: impl Into<String>, action: PanelAction) -> Self {
        PanelItem {
            label: label.into(),
            action,
        }
    }
}

type PanelCtor = fn() -> Panel;

/// Static map from panel name to constructor, with a lazy instantiation
/// cache keyed by name. Panels are built on demand, at most once.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    ctors: IndexMap<&'static str, PanelCtor>,
    cache: HashMap<String, Panel>,
}

impl PanelRegistry {
    pub fn builtin() -> Self {
        let mut registry = PanelRegistry::default();
        registry.register("More", more_panel);
        registry.register("PersonalTools", personal_tools_panel);
        registry.register("History", history_panel);
        registry.register("Sharing", sharing_panel);
        registry.register("Display", display_panel);
        registry.register("Profile", profile_panel);
        registry
    }

    pub fn register(&mut self, name: &'static str, ctor: PanelCtor) {
        self.ctors.insert(name, ctor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ctors.contains_key(name)
    }

    /// Instantiate the named panel, constructing it at most once.
    pub fn resolve(&mut self, name: &str) -> Option<Panel> {
        if let Some(panel) = self.cache.get(name) {
            return Some(panel.clone());
        }
        let ctor = self.ctors.get(name)?;
        let panel = ctor();
        self.cache.insert(name.to_string(), panel.clone());
        Some(panel)
    }
}

fn more_panel() -> Panel {
    Panel::new("More").with_items(vec![
        PanelItem::new("State", PanelAction::Inert),
        PanelItem::new("Display", PanelAction::Push("Display".to_string())),
        PanelItem::new("History", PanelAction::Push("History".to_string())),
        PanelItem::new("Grant access", PanelAction::Push("Sharing".to_string())),
        PanelItem::new(
            "Personal tools",
            PanelAction::Push("PersonalTools".to_string()),
        ),
    ])
}

fn personal_tools_panel() -> Panel {
    Panel::new("Personal tools").with_items(vec![
        PanelItem::new("Profile", PanelAction::Push("Profile".to_string())),
        PanelItem::new(
            "Preferences",
            PanelAction::Navigate("/personal-preferences".to_string()),
        ),
        PanelItem::new(
            "Site setup",
            PanelAction::Navigate("/controlpanel".to_string()),
        ),
        PanelItem::new("Log out", PanelAction::Navigate("/logout".to_string())),
    ])
}

// History and Display start empty; the runtime fills them from the store
// and the schema's layout list once the panel is open.
fn history_panel() -> Panel {
    Panel::new("History")
}

fn display_panel() -> Panel {
    Panel::new("Display")
}

fn sharing_panel() -> Panel {
    Panel::new("Sharing").with_items(vec![PanelItem::new(
        "Manage sharing",
        PanelAction::Navigate("/sharing".to_string()),
    )])
}

fn profile_panel() -> Panel {
    Panel::new("Profile").with_items(vec![PanelItem::new(
        "Personal information",
        PanelAction::Navigate("/personal-information".to_string()),
    )])
}
