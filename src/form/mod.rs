mod blocks;
mod field;
mod state;
mod validate;

pub use blocks::Block;
pub use field::{FieldState, WidgetValue};
pub use state::{DisplayMode, FieldsetState, FormState, SubmitOutcome};
pub use validate::{
    ERROR_SUMMARY_MESSAGE, REQUIRED_MESSAGE, UNIQUE_ITEMS_MESSAGE, is_falsy, min_length_message,
    validate,
};
