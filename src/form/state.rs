use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::ContentSchema;

use super::{
    blocks::Block,
    field::FieldState,
    validate::{self, is_falsy},
};

/// Which of the two mutually exclusive render strategies the form uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Schema-driven fieldsets, one tab per fieldset when several exist.
    Fieldsets,
    /// Fixed, ordered list of content blocks (the "visual" mode).
    Blocks,
}

#[derive(Debug, Clone)]
pub struct FieldsetState {
    pub id: String,
    pub title: String,
    pub fields: Vec<FieldState>,
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed; the payload is ready for the caller's submit
    /// callback.
    Accepted(IndexMap<String, Value>),
    /// Validation failed; the errors map was replaced and the callback
    /// must not fire.
    Rejected { error_count: usize },
}

/// Editable form state: the candidate payload, per-field errors, and the
/// focus bookkeeping for the interactive renderer. Created fresh from
/// `{schema, content}` and discarded when the editing session ends.
///
/// All mutation funnels through `apply_edit` / `submit`, so the state
/// transitions stay auditable in isolation.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fieldsets: Vec<FieldsetState>,
    values: IndexMap<String, Value>,
    errors: IndexMap<String, Vec<String>>,
    initial: IndexMap<String, Value>,
    pub fieldset_index: usize,
    pub field_index: usize,
    pub mode: DisplayMode,
    pub blocks: Vec<Block>,
    reset_after_submit: bool,
    top_error: Option<String>,
}

impl FormState {
    pub fn new(schema: &ContentSchema, content: &serde_json::Map<String, Value>) -> Self {
        let mut fieldsets = Vec::with_capacity(schema.fieldsets.len());
        for fieldset in &schema.fieldsets {
            let mut fields = Vec::with_capacity(fieldset.fields.len());
            for field_id in &fieldset.fields {
                let Some(spec) = schema.field(field_id) else {
                    continue;
                };
                let mut field = FieldState::from_spec(spec.clone(), schema.is_required(field_id));
                if let Some(value) = content.get(field_id) {
                    field.seed(value);
                }
                fields.push(field);
            }
            fieldsets.push(FieldsetState {
                id: fieldset.id.clone(),
                title: fieldset.title.clone(),
                fields,
            });
        }

        let mut values = IndexMap::new();
        for (field_id, spec) in &schema.properties {
            let value = content
                .get(field_id)
                .cloned()
                .or_else(|| spec.default.clone())
                .unwrap_or(Value::Null);
            values.insert(field_id.clone(), normalize(value));
        }

        FormState {
            fieldsets,
            initial: values.clone(),
            values,
            errors: IndexMap::new(),
            fieldset_index: 0,
            field_index: 0,
            mode: DisplayMode::Fieldsets,
            blocks: Vec::new(),
            reset_after_submit: false,
            top_error: None,
        }
    }

    pub fn with_reset_after_submit(mut self, reset: bool) -> Self {
        self.reset_after_submit = reset;
        self
    }

    pub fn set_reset_after_submit(&mut self, reset: bool) {
        self.reset_after_submit = reset;
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            DisplayMode::Fieldsets => DisplayMode::Blocks,
            DisplayMode::Blocks => DisplayMode::Fieldsets,
        };
    }

    /// Reducer for field edits: replaces the candidate value, storing the
    /// explicit `Null` marker for falsy input. No validation runs here;
    /// that is deferred to `submit`.
    pub fn apply_edit(&mut self, field_id: &str, value: Value) {
        self.values.insert(field_id.to_string(), normalize(value));
    }

    /// Validate the candidate payload against the schema. On success the
    /// caller receives the payload for its submit callback; on failure the
    /// whole errors map is replaced and submission is aborted.
    pub fn submit(&mut self, schema: &ContentSchema) -> SubmitOutcome {
        let errors = validate::validate(schema, &self.values);
        if !errors.is_empty() {
            let error_count = errors.values().map(Vec::len).sum();
            self.errors = errors;
            return SubmitOutcome::Rejected { error_count };
        }
        self.errors = IndexMap::new();
        let payload = self.values.clone();
        if self.reset_after_submit {
            self.values = self.initial.clone();
            self.reseed_fields();
        }
        SubmitOutcome::Accepted(payload)
    }

    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    pub fn value(&self, field_id: &str) -> &Value {
        self.values.get(field_id).unwrap_or(&Value::Null)
    }

    pub fn errors_for(&self, field_id: &str) -> &[String] {
        self.errors
            .get(field_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Top-level error from the external store (update failure). Shown as
    /// a banner; the form stays editable and resubmittable.
    pub fn set_top_error(&mut self, message: impl Into<String>) {
        self.top_error = Some(message.into());
    }

    pub fn clear_top_error(&mut self) {
        self.top_error = None;
    }

    pub fn top_error(&self) -> Option<&str> {
        self.top_error.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    pub fn active_fieldset(&self) -> Option<&FieldsetState> {
        self.fieldsets.get(self.fieldset_index)
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.active_fieldset()
            .and_then(|fieldset| fieldset.fields.get(self.field_index))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        let index = self.field_index;
        self.fieldsets
            .get_mut(self.fieldset_index)
            .and_then(|fieldset| fieldset.fields.get_mut(index))
    }

    pub fn focus_next_field(&mut self) {
        let Some(fieldset) = self.active_fieldset() else {
            return;
        };
        if self.field_index + 1 < fieldset.fields.len() {
            self.field_index += 1;
        } else {
            self.focus_next_fieldset(1);
        }
    }

    pub fn focus_prev_field(&mut self) {
        if self.field_index > 0 {
            self.field_index -= 1;
        } else {
            self.focus_next_fieldset(-1);
            if let Some(fieldset) = self.active_fieldset() {
                self.field_index = fieldset.fields.len().saturating_sub(1);
            }
        }
    }

    pub fn focus_next_fieldset(&mut self, delta: i32) {
        let len = self.fieldsets.len() as i32;
        if len == 0 {
            return;
        }
        let next = (self.fieldset_index as i32 + delta).rem_euclid(len);
        self.fieldset_index = next as usize;
        self.field_index = 0;
    }

    fn reseed_fields(&mut self) {
        for fieldset in &mut self.fieldsets {
            for field in &mut fieldset.fields {
                let value = self
                    .initial
                    .get(&field.spec.id)
                    .cloned()
                    .unwrap_or(Value::Null);
                field.seed(&value);
            }
        }
    }
}

fn normalize(value: Value) -> Value {
    if is_falsy(&value) { Value::Null } else { value }
}
