use contentui::{ContentUI, MemoryStore, UiOptions};
use serde_json::json;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let mut store = MemoryStore::new();
    store.insert_schema(
        "Document",
        json!({
            "title": "Document",
            "fieldsets": [
                {
                    "id": "default",
                    "title": "Default",
                    "fields": ["title", "description", "text"]
                },
                {
                    "id": "categorization",
                    "title": "Categorization",
                    "fields": ["subjects", "language"]
                },
                {
                    "id": "settings",
                    "title": "Settings",
                    "fields": ["exclude_from_nav", "shortname"]
                }
            ],
            "properties": {
                "title": {
                    "title": "Title",
                    "type": "string",
                    "minLength": 3
                },
                "description": {
                    "title": "Summary",
                    "description": "Used in item listings and search results.",
                    "type": "string",
                    "widget": "textarea"
                },
                "text": {
                    "title": "Text",
                    "widget": "richtext"
                },
                "subjects": {
                    "title": "Tags",
                    "type": "array",
                    "uniqueItems": true
                },
                "language": {
                    "title": "Language",
                    "type": "string",
                    "choices": ["en", "de", "fr", "pt-br"],
                    "default": "en"
                },
                "exclude_from_nav": {
                    "title": "Exclude from navigation",
                    "type": "boolean",
                    "default": false
                },
                "shortname": {
                    "title": "Short name",
                    "description": "This name will be displayed in the URL.",
                    "type": "string"
                }
            },
            "required": ["title"],
            "layouts": ["document_view", "summary_view", "tabular_view"]
        }),
    );
    store.insert_content(
        "/front-page",
        json!({
            "@type": "Document",
            "title": "Welcome!",
            "description": "Congratulations! You have successfully installed this site.",
            "text": {
                "content-type": "text/html",
                "data": "<p>If you are seeing this page instead of the web site you were expecting, the owner of this web site has just installed a new content platform.</p>",
                "encoding": "utf8"
            },
            "subjects": [],
            "language": "en",
            "exclude_from_nav": false,
            "layout": "document_view"
        }),
    );

    let saved = ContentUI::new(Box::new(store), "/front-page")
        .with_options(UiOptions::default().with_confirm_exit(true))
        .run()?;

    if let Some(payload) = saved {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }
    Ok(())
}
