//! UI language preference.
//!
//! Reads and writes the `language` key in `localStorage`; Korean is the
//! default for first-time visitors. SSR paths safely fall back to the
//! default so server rendering stays deterministic.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use crate::util::storage;

const STORAGE_KEY: &str = "language";

/// Languages the UI ships strings for.
pub const SUPPORTED: &[&str] = &["ko", "en"];

/// Clamp an arbitrary stored value to a supported language code.
#[must_use]
pub fn normalize(raw: Option<&str>) -> &'static str {
    match raw {
        Some("en") => "en",
        _ => "ko",
    }
}

/// Read the persisted preference, defaulting to Korean.
#[must_use]
pub fn read_preference() -> &'static str {
    normalize(storage::load_string(STORAGE_KEY).as_deref())
}

/// Persist a new preference.
pub fn save_preference(language: &str) {
    storage::save_string(STORAGE_KEY, normalize(Some(language)));
}

/// Native-script label for a supported language code.
#[must_use]
pub fn label(code: &str) -> &'static str {
    match code {
        "en" => "English",
        _ => "한국어",
    }
}
