use std::collections::BTreeMap;

use evadmin_api::{Draft, FieldKind, FieldSpec, FieldValue, PendingUpload, Record, RecordId, Schema};

use super::validators::{self, ValidationError};

/// What a file field currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePreview {
    /// Attachment already stored by the service.
    Remote(String),
    /// Local file picked in this form, not yet uploaded.
    Local { file_name: String },
}

/// In-progress edits for one schema.
///
/// The editor is bound to at most one existing record (`initialData`). When
/// unbound it drafts a new record and resets itself after each submission.
#[derive(Debug, Clone)]
pub struct FormEditor {
    schema: &'static Schema,
    draft: Draft,
    bound_id: Option<RecordId>,
    previews: BTreeMap<&'static str, FilePreview>,
    focus: usize,
    validation_error: Option<ValidationError>,
}

impl FormEditor {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            draft: schema.blank_draft(),
            bound_id: None,
            previews: BTreeMap::new(),
            focus: 0,
            validation_error: None,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn bound_id(&self) -> Option<&RecordId> {
        self.bound_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.bound_id.is_some()
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn preview(&self, field: &str) -> Option<&FilePreview> {
        self.previews.get(field)
    }

    /// Rebinds the editor. `Some` replaces the whole draft with the record's
    /// values, `None` resets to a blank draft. Previews never carry over.
    pub fn set_initial_data(&mut self, initial: Option<&Record>) {
        match initial {
            Some(record) => {
                self.draft = self.schema.draft_from(record);
                self.bound_id = Some(record.id().clone());
                self.previews = self
                    .schema
                    .fields
                    .iter()
                    .filter(|spec| spec.kind == FieldKind::File)
                    .filter_map(|spec| {
                        let url = record.field(spec.name)?.as_text()?;
                        Some((spec.name, FilePreview::Remote(url.to_string())))
                    })
                    .collect();
            }
            None => {
                self.draft = self.schema.blank_draft();
                self.bound_id = None;
                self.previews.clear();
            }
        }
        self.focus = 0;
        self.validation_error = None;
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> &'static FieldSpec {
        &self.schema.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.schema.fields.len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.schema.fields.len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn value(&self, field: &str) -> &FieldValue {
        static EMPTY: FieldValue = FieldValue::Empty;
        self.draft.get(field).unwrap_or(&EMPTY)
    }

    /// Text being typed into a field: the text itself, or the path of a
    /// pending upload.
    pub fn input_text(&self, field: &str) -> String {
        match self.value(field) {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Upload(upload) => upload.path().to_string_lossy().into_owned(),
            FieldValue::Empty | FieldValue::Flag(_) => String::new(),
        }
    }

    /// Sets one field. Unknown field names are ignored.
    pub fn update_field(&mut self, field: &str, value: FieldValue) {
        let Some(spec) = self.schema.field(field) else {
            tracing::warn!("Ignoring update of unknown field '{}'", field);
            return;
        };
        if spec.kind == FieldKind::File {
            match &value {
                FieldValue::Upload(upload) => {
                    self.previews.insert(
                        spec.name,
                        FilePreview::Local {
                            file_name: upload.file_name(),
                        },
                    );
                }
                FieldValue::Text(url) => {
                    self.previews
                        .insert(spec.name, FilePreview::Remote(url.clone()));
                }
                FieldValue::Empty | FieldValue::Flag(_) => {
                    self.previews.remove(spec.name);
                }
            }
        }
        self.draft.set(spec.name, value);
        self.validation_error = None;
    }

    pub fn append_char(&mut self, c: char) {
        let spec = self.focused_field();
        let mut text = match spec.kind {
            FieldKind::Text | FieldKind::DateTime => self.input_text(spec.name),
            FieldKind::File => match self.value(spec.name) {
                // Typing over a stored attachment starts a new path.
                FieldValue::Upload(_) => self.input_text(spec.name),
                _ => String::new(),
            },
            FieldKind::Choice(_) | FieldKind::Boolean => return,
        };
        text.push(c);
        let value = match spec.kind {
            FieldKind::File => FieldValue::Upload(PendingUpload::new(text)),
            _ => FieldValue::text(text),
        };
        self.update_field(spec.name, value);
    }

    pub fn delete_char(&mut self) {
        let spec = self.focused_field();
        if !matches!(
            spec.kind,
            FieldKind::Text | FieldKind::DateTime | FieldKind::File
        ) {
            return;
        }
        let mut text = self.input_text(spec.name);
        if text.pop().is_none() {
            return;
        }
        let value = match spec.kind {
            FieldKind::File if !text.is_empty() => FieldValue::Upload(PendingUpload::new(text)),
            FieldKind::File => FieldValue::Empty,
            _ => FieldValue::text(text),
        };
        self.update_field(spec.name, value);
    }

    pub fn clear_field(&mut self) {
        let spec = self.focused_field();
        self.update_field(spec.name, spec.default_value());
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        let spec = self.focused_field();
        let FieldKind::Choice(options) = spec.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.value(spec.name).as_text().unwrap_or_default();
        let next = match options.iter().position(|option| *option == current) {
            Some(index) if forward => (index + 1) % options.len(),
            Some(index) => (index + options.len() - 1) % options.len(),
            None => 0,
        };
        self.update_field(spec.name, FieldValue::text(options[next]));
    }

    pub fn toggle_flag(&mut self) {
        let spec = self.focused_field();
        if spec.kind != FieldKind::Boolean {
            return;
        }
        let current = self.value(spec.name).as_flag().unwrap_or(false);
        self.update_field(spec.name, FieldValue::Flag(!current));
    }

    /// Validates the draft and hands a normalized copy to `on_submit`.
    ///
    /// On failure the callback is not invoked and the error is kept for
    /// display. A successful submit resets the draft only when no record is
    /// bound.
    pub fn submit(&mut self, on_submit: impl FnOnce(Draft)) -> Result<(), ValidationError> {
        match validators::validate_draft(self.schema, &self.draft) {
            Ok(normalized) => {
                self.validation_error = None;
                on_submit(normalized);
                if self.bound_id.is_none() {
                    self.set_initial_data(None);
                }
                Ok(())
            }
            Err(err) => {
                tracing::debug!("Form for {} rejected: {}", self.schema.kind, err);
                self.validation_error = Some(err.clone());
                Err(err)
            }
        }
    }
}
