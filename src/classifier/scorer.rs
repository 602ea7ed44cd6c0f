//! Query scoring
//!
//! The score of a language is the dot product of the query's raw counts
//! with that language's unit vector, taken over the query's trigrams only.
//! The query is never normalized, so scores grow with document length but
//! rank languages the same way.

use crate::model::{LanguageLabel, TrainedModel, TrigramCounts};
use indexmap::IndexMap;

/// Label -> similarity score, one entry per trained language, in model order.
pub type ScoreMap = IndexMap<LanguageLabel, f64>;

/// Score `query` against every language in `model`.
pub fn score_document(query: &TrigramCounts, model: &TrainedModel) -> ScoreMap {
    model
        .iter()
        .map(|(label, vector)| {
            let score = query
                .iter()
                .map(|(trigram, count)| count as f64 * vector.weight(trigram))
                .sum();
            (label.clone(), score)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{count_trigrams, normalize, LanguageVector};

    fn model(entries: &[(&str, &str)]) -> TrainedModel {
        TrainedModel::from_languages(
            entries
                .iter()
                .map(|(label, text)| (LanguageLabel::new(label), normalize(&count_trigrams(text)).unwrap()))
                .collect::<IndexMap<LanguageLabel, LanguageVector>>(),
        )
    }

    #[test]
    fn test_one_entry_per_language_even_without_overlap() {
        let m = model(&[("a", "aaaa"), ("b", "bbbb"), ("c", "cccc")]);
        let scores = score_document(&count_trigrams("zzzzz"), &m);
        assert_eq!(scores.len(), 3);
        assert!(scores.values().all(|s| *s == 0.0));
    }

    #[test]
    fn test_score_is_count_times_weight() {
        // "abcabc" -> abc:2, bca:1, cab:1 ; magnitude sqrt(6)
        let m = model(&[("x", "abcabc")]);
        let mut query = TrigramCounts::new();
        query.add("abc", 3);
        query.add("zzz", 10);
        let scores = score_document(&query, &m);
        let expected = 3.0 * 2.0 / 6f64.sqrt();
        assert!((scores[&LanguageLabel::new("x")] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_scores_follow_model_order() {
        let m = model(&[("zz", "zzzz"), ("aa", "aaaa")]);
        let scores = score_document(&count_trigrams("aaa"), &m);
        let labels: Vec<&str> = scores.keys().map(LanguageLabel::as_str).collect();
        assert_eq!(labels, vec!["ZZ", "AA"]);
    }

    #[test]
    fn test_empty_query_scores_zero_everywhere() {
        let m = model(&[("en", "the cat sat"), ("fr", "le chat est assis")]);
        let scores = score_document(&count_trigrams(""), &m);
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|s| *s == 0.0));
    }
}
