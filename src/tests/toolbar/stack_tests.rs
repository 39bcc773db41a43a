use crate::toolbar::{Panel, PanelItem, PanelRegistry, PanelStack};

fn mk_stack() -> PanelStack {
    PanelStack::new(PanelRegistry::builtin())
}

#[test]
fn toggle_opens_and_loads_the_selector_panel() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    assert!(stack.is_shown());
    assert_eq!(stack.complete_loads(), ["More"]);
    assert_eq!(stack.names(), ["More"]);
}

#[test]
fn toggling_twice_leaves_the_menu_closed_and_empty() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    stack.complete_loads();
    stack.toggle_menu("More").unwrap();
    assert!(!stack.is_shown());
    assert!(stack.entries().is_empty());
}

#[test]
fn nested_panels_stack_and_unload_in_order() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    stack.complete_loads();
    stack.load_panel("History").unwrap();
    stack.load_panel("Sharing").unwrap();
    stack.complete_loads();
    assert_eq!(stack.names(), ["More", "History", "Sharing"]);
    assert_eq!(
        stack.entries().iter().map(|e| e.slot).collect::<Vec<_>>(),
        [0, 1, 2]
    );

    let popped = stack.unload_panel().unwrap();
    assert_eq!(popped.name, "Sharing");
    assert_eq!(stack.names(), ["More", "History"]);
}

#[test]
fn requesting_the_top_panel_again_is_a_noop() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    // A second request before the first completes must not queue a twin.
    stack.load_panel("More").unwrap();
    assert_eq!(stack.complete_loads(), ["More"]);

    // Same once the panel is on the stack.
    stack.load_panel("More").unwrap();
    assert!(stack.complete_loads().is_empty());
    assert_eq!(stack.names(), ["More"]);
}

#[test]
fn drilling_down_and_back_keeps_the_lower_panel() {
    let mut stack = mk_stack();
    stack.toggle_menu("History").unwrap();
    stack.load_panel("Sharing").unwrap();
    stack.complete_loads();
    assert_eq!(stack.names(), ["History", "Sharing"]);

    stack.unload_panel();
    assert_eq!(stack.names(), ["History"]);

    // Re-requesting the panel left on top changes nothing.
    stack.load_panel("History").unwrap();
    assert!(stack.complete_loads().is_empty());
    assert_eq!(stack.names(), ["History"]);
}

#[test]
fn unknown_panel_names_are_an_error() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    let err = stack.load_panel("Bogus").unwrap_err();
    assert!(err.message.contains("Bogus"));
    assert_eq!(stack.complete_loads(), ["More"]);
}

#[test]
fn loads_that_finish_after_close_are_dropped() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    stack.close();
    // The request was in flight when the menu closed.
    assert_eq!(stack.complete_next_load(), None);
    assert!(stack.entries().is_empty());
}

#[test]
fn a_reopened_menu_ignores_the_previous_generation() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    stack.close();
    stack.toggle_menu("More").unwrap();
    // One stale load and one live load are queued; only the live one lands.
    assert_eq!(stack.complete_loads(), ["More"]);
    assert_eq!(stack.names(), ["More"]);
}

#[test]
fn selection_wraps_within_a_panel() {
    let mut stack = mk_stack();
    stack.toggle_menu("More").unwrap();
    stack.complete_loads();
    let top = stack.top_mut().unwrap();
    let count = top.panel.items.len();
    assert!(count > 1);
    top.select_prev();
    assert_eq!(top.selected, count - 1);
    top.select_next();
    assert_eq!(top.selected, 0);
}

#[test]
fn custom_registrations_resolve_like_builtins() {
    fn workflow_panel() -> Panel {
        Panel::new("Workflow").with_items(vec![PanelItem::new(
            "Publish",
            crate::toolbar::PanelAction::Inert,
        )])
    }
    let mut registry = PanelRegistry::builtin();
    registry.register("Workflow", workflow_panel);
    let mut stack = PanelStack::new(registry);
    stack.toggle_menu("Workflow").unwrap();
    assert_eq!(stack.complete_loads(), ["Workflow"]);
    assert_eq!(stack.top().unwrap().panel.title, "Workflow");
}
