//! Raw trigram counting
//!
//! A trigram is any run of three consecutive characters (Unicode scalar
//! values, not bytes). The window slides one character at a time with no
//! padding, so a document of `n` characters yields `n - 2` occurrences.

use super::vector::{normalize, LanguageVector};
use crate::error::LangIdResult;
use rustc_hash::FxHashMap;

/// Window width. Fixed: only trigrams are modelled.
pub const TRIGRAM_LEN: usize = 3;

/// Sparse mapping of trigram -> occurrence count.
///
/// Used for the query document and for per-language accumulation during
/// training. Absent trigrams read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrigramCounts {
    counts: FxHashMap<String, u64>,
}

impl TrigramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every trigram in `document`.
    pub fn from_text(document: &str) -> Self {
        let mut counts = Self::new();
        counts.add_text(document);
        counts
    }

    /// Add the trigrams of `document` to the existing counts.
    pub fn add_text(&mut self, document: &str) {
        // Byte offset of every char start, plus the end of the string, so
        // each window can be sliced out without re-walking the text.
        let bounds: Vec<usize> = document
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(document.len()))
            .collect();

        let char_count = bounds.len() - 1;
        if char_count < TRIGRAM_LEN {
            return;
        }

        for i in 0..=char_count - TRIGRAM_LEN {
            self.add(&document[bounds[i]..bounds[i + TRIGRAM_LEN]], 1);
        }
    }

    /// Increase the count of a single trigram.
    pub fn add(&mut self, trigram: &str, n: u64) {
        if let Some(count) = self.counts.get_mut(trigram) {
            *count += n;
        } else {
            self.counts.insert(trigram.to_owned(), n);
        }
    }

    /// Key-wise sum of `other` into `self`.
    pub fn merge(&mut self, other: TrigramCounts) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (trigram, n) in other.counts {
            *self.counts.entry(trigram).or_insert(0) += n;
        }
    }

    /// Count for `trigram`, zero when it never occurred.
    pub fn get(&self, trigram: &str) -> u64 {
        self.counts.get(trigram).copied().unwrap_or(0)
    }

    /// Number of distinct trigrams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all trigrams.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Rescale to unit Euclidean norm. See [`normalize`].
    pub fn normalize(&self) -> LangIdResult<LanguageVector> {
        normalize(self)
    }
}

/// Count the trigrams of a document.
///
/// Documents shorter than three characters produce an empty mapping.
pub fn count_trigrams(document: &str) -> TrigramCounts {
    TrigramCounts::from_text(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_documents_are_empty() {
        for doc in ["", "a", "ab", "é", "日本"] {
            assert!(count_trigrams(doc).is_empty(), "{doc:?} should have no trigrams");
        }
    }

    #[test]
    fn test_overlapping_windows_are_counted() {
        let counts = count_trigrams("aaaa");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("aaa"), 2);
    }

    #[test]
    fn test_occurrences_equal_length_minus_two() {
        for doc in ["abc", "the cat sat", "le chat est assis", "ünïcödé wörds", "日本語のテキスト"] {
            let n = doc.chars().count() as u64;
            assert_eq!(count_trigrams(doc).total(), n - 2, "document {doc:?}");
        }
    }

    #[test]
    fn test_windows_are_characters_not_bytes() {
        let counts = count_trigrams("héllo");
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("hél"), 1);
        assert_eq!(counts.get("éll"), 1);
        assert_eq!(counts.get("llo"), 1);
    }

    #[test]
    fn test_missing_trigram_reads_zero() {
        let counts = count_trigrams("the cat");
        assert_eq!(counts.get("zzz"), 0);
    }

    #[test]
    fn test_spaces_are_part_of_trigrams() {
        let counts = count_trigrams("a b");
        assert_eq!(counts.get("a b"), 1);
    }

    #[test]
    fn test_merge_sums_keywise() {
        let mut a = count_trigrams("abcd");
        a.merge(count_trigrams("bcde"));
        assert_eq!(a.get("abc"), 1);
        assert_eq!(a.get("bcd"), 2);
        assert_eq!(a.get("cde"), 1);
        assert_eq!(a.total(), 4);
    }

    #[test]
    fn test_merge_into_empty_takes_other() {
        let mut a = TrigramCounts::new();
        a.merge(count_trigrams("xyz"));
        assert_eq!(a.get("xyz"), 1);
    }
}
