//! Best-language selection with a tolerance band
//!
//! Languages are scanned in model order against a running best. A score
//! within `tolerance` of the current best joins the tie set; a score above
//! it by more than `tolerance` replaces the best and resets the set.
//!
//! Membership is only checked against the running best, never pairwise, so
//! a chain A ~ B ~ C can put A and C in the same tie set even when they
//! differ by more than `tolerance`.

use super::scorer::ScoreMap;
use crate::error::{LangIdError, LangIdResult};
use crate::model::LanguageLabel;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// Scores closer than this are considered equal.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Classification {
    /// A single best language
    Language { label: LanguageLabel },
    /// Several languages scored within tolerance; more text is needed
    Tie { candidates: Vec<LanguageLabel> },
}

impl Classification {
    pub fn is_tie(&self) -> bool {
        matches!(self, Classification::Tie { .. })
    }

    /// The winning label, if there is exactly one.
    pub fn label(&self) -> Option<&LanguageLabel> {
        match self {
            Classification::Language { label } => Some(label),
            Classification::Tie { .. } => None,
        }
    }

    /// Every label still in contention (one for a definitive result).
    pub fn candidates(&self) -> &[LanguageLabel] {
        match self {
            Classification::Language { label } => std::slice::from_ref(label),
            Classification::Tie { candidates } => candidates,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Language { label } => write!(f, "{label}"),
            Classification::Tie { candidates } => {
                let names: Vec<&str> = candidates.iter().map(LanguageLabel::as_str).collect();
                write!(f, "tie between {}", names.join(", "))
            }
        }
    }
}

/// Pick the best language from `scores`.
///
/// Fails only when `scores` is empty, i.e. the model had no languages.
pub fn decide(scores: &ScoreMap, tolerance: f64) -> LangIdResult<Classification> {
    let (mut best, mut best_score) = match scores.first() {
        Some((label, score)) => (label, *score),
        None => return Err(LangIdError::EmptyModel),
    };
    let mut tie: Vec<&LanguageLabel> = vec![best];

    // The seed is visited again here; duplicates are removed below.
    for (label, &score) in scores {
        let delta = best_score - score;
        if delta > tolerance {
            continue;
        } else if delta < -tolerance {
            best = label;
            best_score = score;
            tie = vec![label];
        } else {
            tie.push(label);
        }
    }

    let distinct: IndexSet<&LanguageLabel> = tie.into_iter().collect();
    if distinct.len() == 1 {
        return Ok(Classification::Language { label: best.clone() });
    }
    Ok(Classification::Tie {
        candidates: distinct.into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> ScoreMap {
        entries
            .iter()
            .map(|(label, score)| (LanguageLabel::new(label), *score))
            .collect()
    }

    fn labels(names: &[&str]) -> Vec<LanguageLabel> {
        names.iter().map(|n| LanguageLabel::new(n)).collect()
    }

    #[test]
    fn test_clear_winner() {
        let result = decide(&scores(&[("en", 0.2), ("fr", 1.5), ("de", 0.9)]), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(result, Classification::Language { label: LanguageLabel::new("fr") });
        assert!(!result.is_tie());
    }

    #[test]
    fn test_single_language_is_definitive() {
        let result = decide(&scores(&[("en", 0.0)]), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(result.label(), Some(&LanguageLabel::new("en")));
    }

    #[test]
    fn test_exact_tie_lists_candidates_in_scan_order() {
        let result = decide(&scores(&[("en", 1.0), ("fr", 2.0), ("de", 2.0)]), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(result, Classification::Tie { candidates: labels(&["fr", "de"]) });
    }

    #[test]
    fn test_all_zero_is_full_tie() {
        let result = decide(&scores(&[("a", 0.0), ("b", 0.0), ("c", 0.0)]), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(result.candidates(), labels(&["a", "b", "c"]).as_slice());
    }

    #[test]
    fn test_noise_below_tolerance_ties() {
        let result = decide(&scores(&[("a", 1.0), ("b", 1.0 + 1e-12)]), DEFAULT_TOLERANCE).unwrap();
        assert!(result.is_tie());
    }

    #[test]
    fn test_difference_above_tolerance_decides() {
        let result = decide(&scores(&[("a", 1.0), ("b", 1.0 + 1e-9)]), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(result.label(), Some(&LanguageLabel::new("b")));
    }

    #[test]
    fn test_chained_near_ties_are_kept() {
        // B and C are each within tolerance of A but 1.8e-10 apart.
        let result = decide(
            &scores(&[("a", 1.0), ("b", 1.0 + 0.9e-10), ("c", 1.0 - 0.9e-10)]),
            DEFAULT_TOLERANCE,
        )
        .unwrap();
        assert_eq!(result, Classification::Tie { candidates: labels(&["a", "b", "c"]) });
    }

    #[test]
    fn test_new_best_resets_tie_set() {
        let result = decide(&scores(&[("a", 1.0), ("b", 1.0), ("c", 3.0)]), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(result.label(), Some(&LanguageLabel::new("c")));
    }

    #[test]
    fn test_empty_scores_is_error() {
        assert!(matches!(decide(&ScoreMap::new(), DEFAULT_TOLERANCE), Err(LangIdError::EmptyModel)));
    }

    #[test]
    fn test_display() {
        let tie = Classification::Tie { candidates: labels(&["en", "fr"]) };
        assert_eq!(tie.to_string(), "tie between EN, FR");
        let single = Classification::Language { label: LanguageLabel::new("en") };
        assert_eq!(single.to_string(), "EN");
    }

    #[test]
    fn test_serializes_with_result_tag() {
        let json = serde_json::to_value(Classification::Language { label: LanguageLabel::new("en") }).unwrap();
        assert_eq!(json, serde_json::json!({"result": "language", "label": "EN"}));
        let json = serde_json::to_value(Classification::Tie { candidates: labels(&["a", "b"]) }).unwrap();
        assert_eq!(json, serde_json::json!({"result": "tie", "candidates": ["A", "B"]}));
    }
}
