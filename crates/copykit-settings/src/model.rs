//! Typed settings record and change payload.
//!
//! # Design
//! - Pure data carriers shared by the store and the admin surface.
//! - Defaults merge under stored values; patches merge over current values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Selector applied when no stored value is usable.
pub const DEFAULT_SELECTOR: &str = "pre";

/// Persisted widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// CSS selector naming the elements whose content receives a copy button.
    pub selector: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
        }
    }
}

impl Settings {
    /// Rebuild a record from its stored JSON form, merging stored fields under
    /// the defaults. A field that is missing, non-string, or blank falls back
    /// to its default.
    #[must_use]
    pub fn from_stored(value: &Value) -> Self {
        let defaults = Self::default();
        let selector = value
            .get("selector")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|candidate| !candidate.is_empty())
            .map_or(defaults.selector, ToString::to_string);
        Self { selector }
    }

    /// Merge a partial update over this record; patched fields win.
    #[must_use]
    pub fn apply(&self, patch: &SettingsPatch) -> Self {
        Self {
            selector: patch
                .selector
                .clone()
                .unwrap_or_else(|| self.selector.clone()),
        }
    }
}

/// Partial settings update submitted by the admin form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsPatch {
    /// Replacement selector, when the form supplied one.
    pub selector: Option<String>,
}

impl SettingsPatch {
    /// Build a patch replacing only the selector.
    #[must_use]
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_record_uses_pre_selector() {
        assert_eq!(Settings::default().selector, "pre");
    }

    #[test]
    fn stored_selector_wins_over_default() {
        let settings = Settings::from_stored(&json!({ "selector": "div.code" }));
        assert_eq!(settings.selector, "div.code");
    }

    #[test]
    fn missing_selector_falls_back_to_default() {
        let settings = Settings::from_stored(&json!({}));
        assert_eq!(settings.selector, DEFAULT_SELECTOR);
    }

    #[test]
    fn blank_or_non_string_selector_falls_back_to_default() {
        let blank = Settings::from_stored(&json!({ "selector": "   " }));
        assert_eq!(blank.selector, DEFAULT_SELECTOR);

        let numeric = Settings::from_stored(&json!({ "selector": 5 }));
        assert_eq!(numeric.selector, DEFAULT_SELECTOR);

        let scalar = Settings::from_stored(&json!("pre"));
        assert_eq!(scalar.selector, DEFAULT_SELECTOR);
    }

    #[test]
    fn apply_prefers_patched_fields() {
        let current = Settings {
            selector: "pre".to_string(),
        };
        let merged = current.apply(&SettingsPatch::with_selector(".highlight"));
        assert_eq!(merged.selector, ".highlight");
    }

    #[test]
    fn apply_keeps_current_fields_when_patch_is_empty() {
        let current = Settings {
            selector: "div.code".to_string(),
        };
        let merged = current.apply(&SettingsPatch::default());
        assert_eq!(merged, current);
    }
}
