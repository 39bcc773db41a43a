use serde_json::json;

use crate::app::{LayoutView, ViewPage};

#[test]
fn layouts_map_to_their_view_renderers() {
    assert_eq!(LayoutView::for_layout(Some("summary_view")), LayoutView::Summary);
    assert_eq!(LayoutView::for_layout(Some("tabular_view")), LayoutView::Tabular);
    assert_eq!(LayoutView::for_layout(Some("document_view")), LayoutView::Document);
    // Anything unrecognized falls back to the document view.
    assert_eq!(LayoutView::for_layout(Some("listing_view")), LayoutView::Document);
    assert_eq!(LayoutView::for_layout(None), LayoutView::Document);
}

#[test]
fn pages_pick_up_title_body_and_layout() {
    let page = ViewPage::from_content(
        "/front-page",
        &json!({
            "title": "Welcome!",
            "description": "Hello",
            "text": {"content-type": "text/html", "data": "<p>body</p>", "encoding": "utf8"},
            "layout": "summary_view"
        }),
    );
    assert_eq!(page.title, "Welcome!");
    assert_eq!(page.description.as_deref(), Some("Hello"));
    assert_eq!(page.body_html.as_deref(), Some("<p>body</p>"));
    assert_eq!(page.layout, LayoutView::Summary);
}

#[test]
fn empty_descriptions_are_dropped() {
    let page = ViewPage::from_content("/p", &json!({"title": "T", "description": ""}));
    assert_eq!(page.description, None);
    assert_eq!(page.body_html, None);
    assert_eq!(page.layout, LayoutView::Document);
}
