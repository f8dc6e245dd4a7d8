//! Localized labels for the standard buttons and titles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Keys for the labels the builders need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    /// Acknowledge / confirm button.
    Ok,
    /// Cancel button.
    Cancel,
    /// Default title for error dialogs.
    Error,
}

impl LabelKey {
    /// Canonical English text, used when no translation exists.
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Cancel => "Cancel",
            Self::Error => "Error",
        }
    }
}

/// Looks up locale-appropriate label text.
///
/// Implementations must be deterministic for a fixed locale and must never
/// fail; fall back to [`LabelKey::canonical`] when a key is missing.
pub trait LabelProvider {
    /// Returns the display string for `key`.
    fn lookup(&self, key: LabelKey) -> String;
}

/// Provider that always returns the canonical English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelProvider for EnglishLabels {
    fn lookup(&self, key: LabelKey) -> String {
        key.canonical().to_string()
    }
}

/// A fixed table of translations with English fallback.
///
/// ```
/// use promptkit_dialog::{LabelKey, LabelProvider, LabelTable};
///
/// let table = LabelTable::from_json(r#"{ "cancel": "Abbrechen" }"#).unwrap();
/// assert_eq!(table.lookup(LabelKey::Cancel), "Abbrechen");
/// assert_eq!(table.lookup(LabelKey::Ok), "OK");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    entries: HashMap<LabelKey, String>,
}

impl LabelTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for one key.
    #[must_use]
    pub fn with(mut self, key: LabelKey, text: impl Into<String>) -> Self {
        self.entries.insert(key, text.into());
        self
    }

    /// Parse a table from a JSON object keyed by `ok`, `cancel` and `error`.
    ///
    /// # Errors
    /// Returns the parse error if `json` is not such an object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl LabelProvider for LabelTable {
    fn lookup(&self, key: LabelKey) -> String {
        self.entries
            .get(&key)
            .filter(|text| !text.is_empty())
            .map_or_else(|| key.canonical().to_string(), Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_canonical() {
        assert_eq!(EnglishLabels.lookup(LabelKey::Ok), "OK");
        assert_eq!(EnglishLabels.lookup(LabelKey::Cancel), "Cancel");
        assert_eq!(EnglishLabels.lookup(LabelKey::Error), "Error");
    }

    #[test]
    fn table_falls_back_per_key() {
        let table = LabelTable::new()
            .with(LabelKey::Ok, "Vale")
            .with(LabelKey::Error, "");
        assert_eq!(table.lookup(LabelKey::Ok), "Vale");
        assert_eq!(table.lookup(LabelKey::Cancel), "Cancel");
        assert_eq!(table.lookup(LabelKey::Error), "Error");
    }

    #[test]
    fn table_from_json() {
        let table = LabelTable::from_json(r#"{"ok":"Valider","error":"Erreur"}"#).unwrap();
        assert_eq!(table.lookup(LabelKey::Ok), "Valider");
        assert_eq!(table.lookup(LabelKey::Error), "Erreur");
        assert_eq!(table.lookup(LabelKey::Cancel), "Cancel");
    }

    #[test]
    fn table_rejects_unknown_keys() {
        assert!(LabelTable::from_json(r#"{"retry":"Again"}"#).is_err());
    }
}
