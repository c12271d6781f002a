use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Server-assigned identity of a record.
///
/// The service hands out numeric keys, but nothing here depends on that: any
/// JSON number or non-empty string is accepted and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.is_empty() => Some(Self(s)),
            _ => None,
        }
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for RecordId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value)
            .ok_or_else(|| de::Error::custom("expected a numeric or string identifier"))
    }
}

/// Local file chosen for a file field, not yet sent to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    path: PathBuf,
}

impl PendingUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Empty,
    Text(String),
    Flag(bool),
    Upload(PendingUpload),
}

impl FieldValue {
    /// Text value, collapsing the empty string to `Empty`.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Text(s)
        }
    }

    /// True when the value would not satisfy a required field.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Flag(_) | Self::Upload(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_upload(&self) -> Option<&PendingUpload> {
        match self {
            Self::Upload(upload) => Some(upload),
            _ => None,
        }
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Flag(b),
            Value::Number(n) => Self::Text(n.to_string()),
            Value::String(s) => Self::text(s),
            other => Self::Text(other.to_string()),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Empty => Value::String(String::new()),
            Self::Text(s) => Value::String(s.clone()),
            Self::Flag(b) => Value::Bool(*b),
            Self::Upload(upload) => Value::String(upload.file_name()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<PendingUpload> for FieldValue {
    fn from(upload: PendingUpload) -> Self {
        Self::Upload(upload)
    }
}

/// A persisted entity as returned by the service. Always carries an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, &value.to_json())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let id = map
            .remove("id")
            .and_then(RecordId::from_json)
            .ok_or_else(|| de::Error::missing_field("id"))?;
        let fields = map
            .into_iter()
            .map(|(name, value)| (name, FieldValue::from_json(value)))
            .collect();
        Ok(Self { id, fields })
    }
}

/// Unsaved field values. Has no identity: whether a draft creates or updates
/// a record is decided by whoever sends it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    fields: BTreeMap<String, FieldValue>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether sending this draft needs a multipart body.
    pub fn has_upload(&self) -> bool {
        self.fields.values().any(FieldValue::is_upload)
    }
}

impl FromIterator<(String, FieldValue)> for Draft {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Draft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, &value.to_json())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_numeric_and_string_ids() {
        let numeric: Record = serde_json::from_value(json!({"id": 7, "title": "Launch"})).unwrap();
        assert_eq!(numeric.id(), &RecordId::from(7));

        let text: Record = serde_json::from_value(json!({"id": "abc", "title": "Launch"})).unwrap();
        assert_eq!(text.id(), "abc");
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let result: Result<Record, _> = serde_json::from_value(json!({"title": "Launch"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_record_field_mapping() {
        let record: Record = serde_json::from_value(json!({
            "id": 1,
            "title": "Launch",
            "reminder": true,
            "guests": 12,
            "description": null,
            "place": ""
        }))
        .unwrap();

        assert_eq!(record.field("title"), Some(&FieldValue::Text("Launch".into())));
        assert_eq!(record.field("reminder"), Some(&FieldValue::Flag(true)));
        assert_eq!(record.field("guests"), Some(&FieldValue::Text("12".into())));
        assert_eq!(record.field("description"), Some(&FieldValue::Empty));
        assert_eq!(record.field("place"), Some(&FieldValue::Empty));
        assert_eq!(record.field("id"), None);
    }

    #[test]
    fn test_draft_json_body() {
        let draft = Draft::new()
            .with_field("title", "Launch")
            .with_field("reminder", false)
            .with_field("description", FieldValue::Empty);

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"title": "Launch", "reminder": false, "description": ""})
        );
        assert!(!draft.has_upload());
    }

    #[test]
    fn test_draft_with_pending_upload() {
        let draft = Draft::new()
            .with_field("full_name", "Ada")
            .with_field("photo", PendingUpload::new("/tmp/portraits/ada.png"));

        assert!(draft.has_upload());
        assert_eq!(
            draft.get("photo").and_then(FieldValue::as_upload).map(PendingUpload::file_name),
            Some("ada.png".to_string())
        );
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::Empty.is_blank());
        assert!(FieldValue::Text("   ".into()).is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
        assert_eq!(FieldValue::from(""), FieldValue::Empty);
    }
}
