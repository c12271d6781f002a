//! User-facing text in English and Spanish.
//!
//! Translations are plain `const` structs; the active language is a process
//! global read through [`t`].

use std::sync::atomic::{AtomicUsize, Ordering};

use evadmin_api::ResourceKind;

mod en;
mod es;
pub mod keys;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Name of the language in that language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Accepts bare codes (`es`), tags (`es-MX`) and locale strings
    /// (`es_ES.UTF-8`).
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Configured language first, then the process locale, then English.
    pub fn detect(configured: Option<&str>) -> Language {
        configured
            .and_then(Language::from_code)
            .or_else(|| {
                ["LC_ALL", "LANG"]
                    .iter()
                    .filter_map(|var| std::env::var(var).ok())
                    .find_map(|value| Language::from_code(&value))
            })
            .unwrap_or_default()
    }

    fn translations(&self) -> &'static Translations {
        match self {
            Language::En => &en::TRANSLATIONS,
            Language::Es => &es::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    let index = match lang {
        Language::En => 0,
        Language::Es => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::Es,
        _ => Language::En,
    }
}

/// Replaces each `{name}` placeholder in `template`.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Singular display name of a resource type.
pub fn resource_name(kind: ResourceKind) -> &'static str {
    let nav = &t().nav;
    match kind {
        ResourceKind::Events => nav.event,
        ResourceKind::Locations => nav.location,
        ResourceKind::Contacts => nav.contact,
    }
}

/// Plural display name of a resource type, also the page title.
pub fn resources_name(kind: ResourceKind) -> &'static str {
    let nav = &t().nav;
    match kind {
        ResourceKind::Events => nav.events,
        ResourceKind::Locations => nav.locations,
        ResourceKind::Contacts => nav.contacts,
    }
}
