//! Frequency tables
//!
//! Counting and ranking are kept as two explicit steps: a [`FrequencyTable`]
//! is an unordered count map that also remembers the order in which each word
//! first appeared, and [`RankedFrequencyTable`] is the ordered sequence
//! materialized from it by a stable sort on descending count.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Split text into case-folded words
///
/// Lower-cases the whole string and splits on runs of whitespace. Punctuation
/// is kept, so `"lake,"` and `"lake"` are different words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Case-fold a single word the same way [`tokenize`] folds tokens
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
}

/// A word and the number of times it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(&str, usize)> for WordCount {
    fn from((word, count): (&str, usize)) -> Self {
        Self::new(word, count)
    }
}

/// Unordered word -> count mapping
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    /// Words in first-occurrence order
    order: Vec<String>,
    total: usize,
}

impl FrequencyTable {
    /// Count every token of `text`
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::default();
        for token in tokenize(text) {
            table.add(token);
        }
        table
    }

    fn add(&mut self, word: String) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(&word) {
            *count += 1;
            return;
        }
        self.order.push(word.clone());
        self.counts.insert(word, 1);
    }

    /// Count for an already case-folded word
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of tokens counted (sum of all counts)
    pub fn total(&self) -> usize {
        self.total
    }

    /// Materialize the ranking: descending count, ties by first occurrence
    pub fn ranked(&self) -> RankedFrequencyTable {
        let mut entries: Vec<WordCount> = self
            .order
            .iter()
            .map(|word| WordCount::new(word.as_str(), self.counts[word]))
            .collect();

        // sort_by_key is stable, so equal counts keep first-occurrence order
        entries.sort_by_key(|entry| Reverse(entry.count));

        RankedFrequencyTable { entries }
    }
}

/// Ordered sequence of (word, count) pairs, highest count first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedFrequencyTable {
    entries: Vec<WordCount>,
}

impl RankedFrequencyTable {
    /// The highest-ranked entry, if any
    pub fn first(&self) -> Option<&WordCount> {
        self.entries.first()
    }

    /// Keep only the first `n` entries
    pub fn truncate(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs as `(word, count)` tuples
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry.word.as_str(), entry.count))
            .collect()
    }
}

impl IntoIterator for RankedFrequencyTable {
    type Item = WordCount;
    type IntoIter = std::vec::IntoIter<WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedFrequencyTable {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
