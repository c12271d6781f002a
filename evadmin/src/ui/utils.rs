use evadmin_api::{FieldKind, FieldSpec, FieldValue};

use crate::i18n::t;

/// Table cell text for a field value.
pub fn display_value(spec: &FieldSpec, value: Option<&FieldValue>) -> String {
    let texts = t();
    match (spec.kind, value) {
        (_, None | Some(FieldValue::Empty)) => texts.common.none.to_string(),
        (FieldKind::Boolean, Some(FieldValue::Flag(flag))) => {
            let text = if *flag { texts.common.yes } else { texts.common.no };
            text.to_string()
        }
        (FieldKind::Choice(_), Some(FieldValue::Text(choice))) => {
            texts.fields.choices.display(choice).to_string()
        }
        (FieldKind::File, Some(FieldValue::Text(url))) => file_name_from_url(url).to_string(),
        (_, Some(FieldValue::Upload(upload))) => upload.file_name(),
        (_, Some(FieldValue::Text(text))) => text.clone(),
        (_, Some(FieldValue::Flag(flag))) => flag.to_string(),
    }
}

/// Last path segment of an attachment URL, without query string.
pub fn file_name_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(url)
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use evadmin_api::schema::{CONTACT_SCHEMA, LOCATION_SCHEMA};

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://cdn.example.com/media/photos/ada.png?v=2"),
            "ada.png"
        );
        assert_eq!(file_name_from_url("photos/ada.png"), "ada.png");
        assert_eq!(file_name_from_url("plain"), "plain");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Señor García", 6), "Señor…");
    }

    #[test]
    fn test_display_value_text_and_file() {
        let title = LOCATION_SCHEMA.field("title").unwrap();
        assert_eq!(display_value(title, Some(&FieldValue::text("HQ"))), "HQ");

        let photo = CONTACT_SCHEMA.field("photo").unwrap();
        assert_eq!(
            display_value(photo, Some(&FieldValue::text("https://cdn/a/b.jpg"))),
            "b.jpg"
        );
    }
}
