mod content_ui;
mod edit;
mod options;
mod runtime;
mod status;
mod terminal;
mod view;

pub use content_ui::ContentUI;
pub use edit::{EditSession, Navigation};
pub use options::UiOptions;
pub use view::{LayoutView, ViewPage};
