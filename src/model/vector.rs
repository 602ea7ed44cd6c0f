//! Normalized language vectors
//!
//! Each distinct trigram is treated as an orthogonal basis dimension, so a
//! profile is a sparse vector and normalizing it means dividing every
//! weight by the Euclidean magnitude.

use super::trigram::TrigramCounts;
use crate::error::{LangIdError, LangIdResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sparse trigram -> weight mapping with unit magnitude.
///
/// Only produced by [`normalize`] or by decoding a persisted model.
/// Absent trigrams weigh zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageVector {
    weights: FxHashMap<String, f64>,
}

impl LanguageVector {
    /// Weight of `trigram`, zero when the language never produced it.
    pub fn weight(&self, trigram: &str) -> f64 {
        self.weights.get(trigram).copied().unwrap_or(0.0)
    }

    /// Number of dimensions with a non-zero weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Rescale raw counts to unit Euclidean norm.
///
/// Precondition: `counts` has at least one non-zero entry. A zero-magnitude
/// input has no direction and is rejected with
/// [`LangIdError::DegenerateVector`] instead of producing NaN weights.
pub fn normalize(counts: &TrigramCounts) -> LangIdResult<LanguageVector> {
    let magnitude = counts
        .iter()
        .map(|(_, n)| {
            let n = n as f64;
            n * n
        })
        .sum::<f64>()
        .sqrt();

    if magnitude == 0.0 || !magnitude.is_finite() {
        return Err(LangIdError::DegenerateVector);
    }

    let weights = counts
        .iter()
        .map(|(trigram, n)| (trigram.to_owned(), n as f64 / magnitude))
        .collect();

    Ok(LanguageVector { weights })
}
