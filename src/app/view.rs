use serde_json::Value;

/// A named display mode assigned to a content item; selects which view
/// renderer draws the page. Anything unrecognized falls back to the
/// document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutView {
    Document,
    Summary,
    Tabular,
}

impl LayoutView {
    pub fn for_layout(layout: Option<&str>) -> Self {
        match layout {
            Some("summary_view") => LayoutView::Summary,
            Some("tabular_view") => LayoutView::Tabular,
            _ => LayoutView::Document,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutView::Document => "Document view",
            LayoutView::Summary => "Summary view",
            LayoutView::Tabular => "Tabular view",
        }
    }
}

/// The View container: a read-only page built from fetched content.
#[derive(Debug, Clone)]
pub struct ViewPage {
    pub path: String,
    pub title: String,
    pub description: Option<String>,
    pub body_html: Option<String>,
    pub layout: LayoutView,
}

impl ViewPage {
    pub fn from_content(path: &str, content: &Value) -> Self {
        let layout = LayoutView::for_layout(content.get("layout").and_then(Value::as_str));
        ViewPage {
            path: path.to_string(),
            title: content
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            description: content
                .get("description")
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            body_html: content
                .get("text")
                .and_then(|text| text.get("data"))
                .and_then(Value::as_str)
                .map(str::to_string),
            layout,
        }
    }
}
