use chrono::{DateTime, NaiveDateTime};
use evadmin_api::{Draft, FieldKind, FieldSpec, FieldValue, Schema};
use itertools::Itertools;

use crate::i18n::{fill, t};

/// Wire format for date-time fields.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const ACCEPTED_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<&'static str>),

    #[error("{field}: cannot parse date and time \"{value}\"")]
    InvalidDateTime { field: &'static str, value: String },
}

impl ValidationError {
    /// Localized text for the form panel.
    pub fn message(&self) -> String {
        let texts = t();
        match self {
            Self::MissingRequired(fields) => {
                let labels = fields.iter().map(|name| texts.fields.label(name)).join(", ");
                fill(texts.form.missing_required, &[("fields", labels.as_str())])
            }
            Self::InvalidDateTime { field, value } => fill(
                texts.form.invalid_date_time,
                &[("field", texts.fields.label(field)), ("value", value.as_str())],
            ),
        }
    }
}

/// Checks required fields and returns the normalized draft to send.
///
/// Only schema fields are kept. Text is trimmed, date-times are rewritten to
/// [`DATE_TIME_FORMAT`], and file fields are kept only when they hold a new
/// upload.
pub fn validate_draft(schema: &Schema, draft: &Draft) -> Result<Draft, ValidationError> {
    let missing: Vec<&'static str> = schema
        .fields
        .iter()
        .filter(|spec| spec.required && draft.get(spec.name).map_or(true, FieldValue::is_blank))
        .map(|spec| spec.name)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired(missing));
    }

    let mut normalized = Draft::new();
    for spec in schema.fields {
        let value = draft
            .get(spec.name)
            .cloned()
            .unwrap_or_else(|| spec.default_value());
        if let Some(value) = normalize_field(spec, value)? {
            normalized.set(spec.name, value);
        }
    }
    Ok(normalized)
}

fn normalize_field(
    spec: &FieldSpec,
    value: FieldValue,
) -> Result<Option<FieldValue>, ValidationError> {
    let normalized = match (spec.kind, value) {
        // Existing attachments stay on the server untouched.
        (FieldKind::File, value @ FieldValue::Upload(_)) => Some(value),
        (FieldKind::File, _) => None,
        (FieldKind::DateTime, FieldValue::Text(text)) if !text.trim().is_empty() => {
            let formatted = normalize_date_time(&text).ok_or_else(|| {
                ValidationError::InvalidDateTime {
                    field: spec.name,
                    value: text.trim().to_string(),
                }
            })?;
            Some(FieldValue::Text(formatted))
        }
        (_, FieldValue::Text(text)) => Some(FieldValue::text(text.trim())),
        (_, value) => Some(value),
    };
    Ok(normalized)
}

/// Parses the accepted date-time spellings into [`DATE_TIME_FORMAT`].
/// RFC 3339 input keeps its wall-clock time and drops the offset.
pub fn normalize_date_time(input: &str) -> Option<String> {
    let input = input.trim();
    let parsed = ACCEPTED_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.naive_local())
        })?;
    Some(parsed.format(DATE_TIME_FORMAT).to_string())
}
