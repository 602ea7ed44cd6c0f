//! Per-language trigram accumulation
//!
//! Counts are summed for every record first and normalized only in
//! [`Trainer::finish`], because a later record may add text to a label
//! that was already seen.

use super::TrainingRecord;
use crate::error::{LangIdError, LangIdResult};
use crate::model::{LanguageLabel, TrainedModel, TrigramCounts};
use indexmap::IndexMap;
use tracing::debug;

/// Accumulates raw trigram counts per canonical label.
#[derive(Debug, Default)]
pub struct Trainer {
    accumulators: IndexMap<LanguageLabel, TrigramCounts>,
    records: usize,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every text of `record` to its label's running counts.
    ///
    /// Records built by hand are validated the same way the corpus reader
    /// validates CSV rows.
    pub fn add_record(&mut self, record: &TrainingRecord) -> LangIdResult<()> {
        self.records += 1;
        if record.label.trim().is_empty() {
            return Err(self.malformed("missing language label"));
        }
        if record.texts.is_empty() {
            return Err(self.malformed("no text fields after the language label"));
        }

        let label = LanguageLabel::new(&record.label);
        let counts = self.accumulators.entry(label).or_default();
        for text in &record.texts {
            counts.add_text(text);
        }
        Ok(())
    }

    /// Number of records added so far.
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Number of distinct labels seen so far.
    pub fn language_count(&self) -> usize {
        self.accumulators.len()
    }

    /// Normalize every accumulated vector into the final model.
    pub fn finish(self) -> LangIdResult<TrainedModel> {
        if self.accumulators.is_empty() {
            return Err(LangIdError::EmptyCorpus);
        }

        let mut languages = IndexMap::with_capacity(self.accumulators.len());
        for (label, counts) in self.accumulators {
            debug!(
                "{}: {} distinct trigrams, {} occurrences",
                label,
                counts.len(),
                counts.total()
            );
            let vector = counts.normalize().map_err(|_| LangIdError::DegenerateLanguage {
                label: label.to_string(),
            })?;
            languages.insert(label, vector);
        }

        Ok(TrainedModel::from_languages(languages))
    }

    fn malformed(&self, reason: &str) -> LangIdError {
        LangIdError::MalformedRecord {
            source_name: "<records>".to_string(),
            line: self.records as u64,
            reason: reason.to_string(),
        }
    }
}
