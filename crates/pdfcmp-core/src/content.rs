//! Position-independent comparison of two documents' word multisets.
//!
//! Ignores line and page structure entirely: robust to arbitrary re-flow,
//! blind to reordering and to duplication beyond multiset counts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How much of the original's words survive in the generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAccuracy {
    /// `matched_count / total_count * 100`; 0 for an empty original.
    pub percent: f64,
    pub matched_count: usize,
    pub total_count: usize,
    /// Lowercased original words absent from the generated document, one
    /// entry per missing occurrence, in order of first appearance.
    pub missing_words: Vec<String>,
}

impl ContentAccuracy {
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.matched_count == self.total_count
    }
}

/// Lowercased word counts, remembering first-appearance order.
#[derive(Debug, Default)]
struct WordBag {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl WordBag {
    fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut bag = WordBag::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let key = word.to_lowercase();
            let count = bag.counts.entry(key.clone()).or_insert(0);
            if *count == 0 {
                bag.order.push(key);
            }
            *count += 1;
        }
        bag
    }

    fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Whether both word sequences hold the same words with the same
/// multiplicities, case-insensitively and in any order.
pub fn words_equal<S: AsRef<str>>(a: &[S], b: &[S]) -> bool {
    WordBag::from_words(a).counts == WordBag::from_words(b).counts
}

/// Fraction of the original's word occurrences also present in the
/// generated document (each occurrence matched at most once).
pub fn content_accuracy<S: AsRef<str>>(original: &[S], generated: &[S]) -> ContentAccuracy {
    let orig = WordBag::from_words(original);
    let gen = WordBag::from_words(generated);

    let total_count = orig.total();
    if total_count == 0 {
        return ContentAccuracy {
            percent: 0.0,
            matched_count: 0,
            total_count: 0,
            missing_words: Vec::new(),
        };
    }

    let mut matched_count = 0;
    let mut missing_words = Vec::new();
    for word in &orig.order {
        let wanted = orig.count(word);
        let found = wanted.min(gen.count(word));
        matched_count += found;
        missing_words.extend(std::iter::repeat(word.clone()).take(wanted - found));
    }

    ContentAccuracy {
        percent: matched_count as f64 / total_count as f64 * 100.0,
        matched_count,
        total_count,
        missing_words,
    }
}
