//! Embedded string bundles for the admin page and client hand-off.
//!
//! # Design
//! - Bundles are compiled in via `include_str!`; unsupported locales fall
//!   back to the default locale with identity translations.
//! - Translation parse failures degrade to empty bundles and log once at
//!   load time.

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::http::{HeaderMap, header::ACCEPT_LANGUAGE};
use serde::Deserialize;
use tracing::error;

/// Supported locale codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
}

impl LocaleCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        let mut parts = tag.split('-');
        let primary = parts.next().unwrap_or(tag).trim();
        if primary.eq_ignore_ascii_case("en") {
            return Some(Self::En);
        }
        None
    }
}

/// Locale used when the request carries no usable language preference.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

#[derive(Debug, Default)]
struct TranslationBundle {
    messages: HashMap<String, String>,
}

impl TranslationBundle {
    fn lookup(&self, message: &str) -> Option<&str> {
        self.messages.get(message).map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct TranslationFile {
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Translate `message` for `locale`, falling back to the message itself.
#[must_use]
pub fn localize(locale: LocaleCode, message: &str) -> String {
    translations_for(locale)
        .lookup(message)
        .map_or_else(|| message.to_string(), ToString::to_string)
}

/// Pick the locale requested by the `Accept-Language` header, if supported.
#[must_use]
pub fn locale_from_headers(headers: &HeaderMap) -> LocaleCode {
    let value = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    if let Some(value) = value
        && let Some(locale) = parse_accept_language(value)
    {
        return locale;
    }
    DEFAULT_LOCALE
}

fn parse_accept_language(value: &str) -> Option<LocaleCode> {
    for part in value.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut components = trimmed.split(';');
        if let Some(tag) = components.next()
            && let Some(locale) = LocaleCode::from_tag(tag.trim())
        {
            return Some(locale);
        }
    }
    None
}

fn translations_for(locale: LocaleCode) -> &'static TranslationBundle {
    static EN_TRANSLATIONS: OnceLock<TranslationBundle> = OnceLock::new();
    match locale {
        LocaleCode::En => EN_TRANSLATIONS.get_or_init(|| load_translations(LocaleCode::En)),
    }
}

fn load_translations(locale: LocaleCode) -> TranslationBundle {
    let raw = match locale {
        LocaleCode::En => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/en.json")),
    };
    match serde_json::from_str::<TranslationFile>(raw) {
        Ok(file) => TranslationBundle {
            messages: file.messages,
        },
        Err(err) => {
            error!(
                error = %err,
                locale = locale.as_str(),
                "failed to parse i18n bundle"
            );
            TranslationBundle::default()
        }
    }
}
