//! Language classification
//!
//! Pipeline per document: raw trigram counts -> per-language scores ->
//! tolerance-banded decision. The [`Classifier`] borrows a loaded
//! [`TrainedModel`]; it holds no state of its own beyond the tolerance,
//! so any number of them can run concurrently against one model.

mod decision;
mod scorer;

pub use decision::{decide, Classification, DEFAULT_TOLERANCE};
pub use scorer::{score_document, ScoreMap};

use crate::error::{LangIdError, LangIdResult};
use crate::model::{count_trigrams, TrainedModel};
use std::path::Path;
use tracing::debug;

/// Classifies documents against a borrowed model.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'m> {
    model: &'m TrainedModel,
    tolerance: f64,
}

impl<'m> Classifier<'m> {
    pub fn new(model: &'m TrainedModel) -> Self {
        Self {
            model,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Use a custom tie tolerance. Must be finite and positive.
    pub fn with_tolerance(model: &'m TrainedModel, tolerance: f64) -> LangIdResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(LangIdError::InvalidConfig(format!(
                "tolerance must be a positive finite number, got {tolerance}"
            )));
        }
        Ok(Self { model, tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn trained_language_count(&self) -> usize {
        self.model.language_count()
    }

    /// Per-language scores for `text`, in model order.
    pub fn scores(&self, text: &str) -> ScoreMap {
        score_document(&count_trigrams(text), self.model)
    }

    /// Classify an in-memory document.
    ///
    /// Text shorter than three characters scores zero everywhere and so
    /// comes back as a tie across every trained language.
    pub fn classify(&self, text: &str) -> LangIdResult<Classification> {
        let result = decide(&self.scores(text), self.tolerance)?;
        debug!("Classified {} chars as {}", text.chars().count(), result);
        Ok(result)
    }

    /// Classify the contents of a UTF-8 text file.
    pub fn classify_file(&self, path: &Path) -> LangIdResult<Classification> {
        let text = std::fs::read_to_string(path).map_err(|e| LangIdError::io(path, e))?;
        self.classify(&text)
    }
}
