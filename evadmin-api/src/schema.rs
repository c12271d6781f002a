use crate::record::{Draft, FieldValue, Record};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Events,
    Locations,
    Contacts,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [Self::Events, Self::Locations, Self::Contacts];

    /// Collection segment of the REST path.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Locations => "locations",
            Self::Contacts => "contacts",
        }
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            Self::Events => &EVENT_SCHEMA,
            Self::Locations => &LOCATION_SCHEMA,
            Self::Contacts => &CONTACT_SCHEMA,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Fixed option list. An empty option stands for "nothing chosen".
    Choice(&'static [&'static str]),
    DateTime,
    Boolean,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Boolean => FieldValue::Flag(false),
            FieldKind::Choice(options) => options
                .first()
                .map(|option| FieldValue::text(*option))
                .unwrap_or_default(),
            FieldKind::Text | FieldKind::DateTime | FieldKind::File => FieldValue::Empty,
        }
    }
}

/// Ordered field descriptors of one resource type.
#[derive(Debug)]
pub struct Schema {
    pub kind: ResourceKind,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    /// Every field at its default.
    pub fn blank_draft(&self) -> Draft {
        self.fields
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default_value()))
            .collect()
    }

    /// Schema fields taken from `record`, defaults where the record has none.
    /// Fields the schema does not know about are dropped.
    pub fn draft_from(&self, record: &Record) -> Draft {
        self.fields
            .iter()
            .map(|spec| {
                let value = record
                    .field(spec.name)
                    .cloned()
                    .unwrap_or_else(|| spec.default_value());
                (spec.name.to_string(), value)
            })
            .collect()
    }
}

const TIMEZONES: &[&str] = &["", "UTC-5", "UTC+0", "UTC+5"];
const REPETITIONS: &[&str] = &["None", "Daily", "Weekly"];
const GREETINGS: &[&str] = &["", "Mr.", "Mrs.", "Dr."];

pub static EVENT_SCHEMA: Schema = Schema {
    kind: ResourceKind::Events,
    fields: &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::optional("guests", FieldKind::Text),
        FieldSpec::required("date_time", FieldKind::DateTime),
        FieldSpec::optional("timezone", FieldKind::Choice(TIMEZONES)),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::optional("repetition", FieldKind::Choice(REPETITIONS)),
        FieldSpec::optional("reminder", FieldKind::Boolean),
        FieldSpec::optional("classification", FieldKind::Text),
        FieldSpec::required("place", FieldKind::Text),
    ],
};

pub static LOCATION_SCHEMA: Schema = Schema {
    kind: ResourceKind::Locations,
    fields: &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("address", FieldKind::Text),
        FieldSpec::required("coordinates", FieldKind::Text),
    ],
};

pub static CONTACT_SCHEMA: Schema = Schema {
    kind: ResourceKind::Contacts,
    fields: &[
        FieldSpec::required("greeting", FieldKind::Choice(GREETINGS)),
        FieldSpec::required("full_name", FieldKind::Text),
        FieldSpec::required("id_number", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Text),
        FieldSpec::required("phone", FieldKind::Text),
        FieldSpec::optional("photo", FieldKind::File),
    ],
};
