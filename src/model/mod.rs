//! Language profiles and the trained model
//!
//! - [`count_trigrams`] turns text into raw [`TrigramCounts`]
//! - [`normalize`] turns raw counts into a unit-length [`LanguageVector`]
//! - [`TrainedModel`] maps each [`LanguageLabel`] to its vector, in the
//!   order the labels were first seen during training
//! - [`ModelStore`] persists and loads a model

mod store;
mod trigram;
mod vector;

pub use store::{load_model, save_model, ModelStore, FORMAT_VERSION};
pub use trigram::{count_trigrams, TrigramCounts, TRIGRAM_LEN};
pub use vector::{normalize, LanguageVector};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive language identifier, stored uppercased.
///
/// "en", "En" and "EN" all name the same language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct LanguageLabel(String);

impl LanguageLabel {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageLabel {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LanguageLabel {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<LanguageLabel> for String {
    fn from(label: LanguageLabel) -> Self {
        label.0
    }
}

/// Label -> normalized vector, in training insertion order.
///
/// Immutable once built; shared read-only between classifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainedModel {
    languages: IndexMap<LanguageLabel, LanguageVector>,
}

impl TrainedModel {
    pub fn from_languages(languages: IndexMap<LanguageLabel, LanguageVector>) -> Self {
        Self { languages }
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn get(&self, label: &LanguageLabel) -> Option<&LanguageVector> {
        self.languages.get(label)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &LanguageLabel> {
        self.languages.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageLabel, &LanguageVector)> {
        self.languages.iter()
    }

    /// Total trigram dimensions across every language.
    pub fn dimension_count(&self) -> usize {
        self.languages.values().map(LanguageVector::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_uppercased() {
        assert_eq!(LanguageLabel::new("en").as_str(), "EN");
        assert_eq!(LanguageLabel::new("En"), LanguageLabel::new("eN"));
        assert_eq!(LanguageLabel::new("français").to_string(), "FRANÇAIS");
    }

    #[test]
    fn test_deserialized_label_is_uppercased() {
        let label: LanguageLabel = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(label.as_str(), "FR");

        let model: TrainedModel = serde_json::from_str(r#"{"en": {"the": 1.0}}"#).unwrap();
        assert!(model.get(&LanguageLabel::new("EN")).is_some());
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"FR\"");
    }

    #[test]
    fn test_model_preserves_insertion_order() {
        let mut languages = IndexMap::new();
        for name in ["zulu", "english", "afrikaans"] {
            languages.insert(
                LanguageLabel::new(name),
                normalize(&count_trigrams(name)).unwrap(),
            );
        }
        let model = TrainedModel::from_languages(languages);
        let labels: Vec<&str> = model.labels().map(LanguageLabel::as_str).collect();
        assert_eq!(labels, vec!["ZULU", "ENGLISH", "AFRIKAANS"]);
        assert_eq!(model.language_count(), 3);
    }
}
