#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod presentation;
mod store;
mod toolbar;

pub use app::{ContentUI, EditSession, LayoutView, Navigation, UiOptions, ViewPage};
pub use domain::{ContentSchema, FieldKind, FieldSpec, Fieldset, parse_content_schema};
pub use form::{
    Block, DisplayMode, ERROR_SUMMARY_MESSAGE, FieldState, FieldsetState, FormState,
    REQUIRED_MESSAGE, SubmitOutcome, UNIQUE_ITEMS_MESSAGE, WidgetValue, min_length_message,
};
pub use presentation::{WidgetRegistry, WidgetRenderer};
pub use store::{
    ApiRequest, ContentStore, HistoryEntry, MemoryStore, Method, StoreError, get_content_request,
    get_history_request, get_schema_request, revert_history_request, update_content_request,
};
pub use toolbar::{
    FAR_FUTURE_EXPIRY_SECS, Panel, PanelAction, PanelEntry, PanelItem, PanelRegistry, PanelStack,
    PreferenceStore, TOOLBAR_EXPANDED_KEY, Toolbar, ToolbarError,
};

pub mod prelude {
    pub use super::{ContentUI, MemoryStore, UiOptions};
}
