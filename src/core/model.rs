//! Unified Result Model
//!
//! Every command maps its output to this model before rendering.

use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalyzerError, WordCount};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// One entry of a ranked table
    Word,
    /// The most frequent word
    Highest,
    /// A single-word lookup
    Frequency,
    /// A self-check outcome
    Check,
    /// A multi-part report
    Report,
    Error,
}

/// Outcome of a self-check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

/// Error information for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemError {
    pub code: String,
    pub message: String,
}

impl ItemError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&AnalyzerError> for ItemError {
    fn from(err: &AnalyzerError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Where the analyzed text came from ("inline", "stdin" or a file path)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Case-folded word
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,

    /// Occurrence count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// 1-based position in the ranking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,

    /// Human-readable text (summaries, check names)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Structured payload for reports and checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Check outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ItemError>,
}

impl ResultItem {
    fn empty(kind: Kind) -> Self {
        Self {
            kind,
            source: None,
            word: None,
            count: None,
            rank: None,
            excerpt: None,
            data: None,
            status: None,
            errors: Vec::new(),
        }
    }

    /// Create a ranked word entry
    pub fn word(rank: usize, entry: &WordCount) -> Self {
        let mut item = Self::empty(Kind::Word);
        item.rank = Some(rank);
        item.word = Some(entry.word.clone());
        item.count = Some(entry.count);
        item
    }

    /// Create the most-frequent-word result
    pub fn highest(entry: &WordCount) -> Self {
        let mut item = Self::empty(Kind::Highest);
        item.rank = Some(1);
        item.word = Some(entry.word.clone());
        item.count = Some(entry.count);
        item
    }

    /// Create a single-word lookup result
    pub fn frequency(word: impl Into<String>, count: usize) -> Self {
        let mut item = Self::empty(Kind::Frequency);
        item.word = Some(word.into());
        item.count = Some(count);
        item
    }

    /// Create a self-check result
    pub fn check(name: impl Into<String>, status: Status) -> Self {
        let mut item = Self::empty(Kind::Check);
        item.excerpt = Some(name.into());
        item.status = Some(status);
        item
    }

    /// Create a report result
    pub fn report(summary: impl Into<String>) -> Self {
        let mut item = Self::empty(Kind::Report);
        item.excerpt = Some(summary.into());
        item
    }

    /// Create a new error result
    pub fn error(error: ItemError) -> Self {
        let mut item = Self::empty(Kind::Error);
        item.errors.push(error);
        item
    }

    /// Set the input label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Add an error
    pub fn with_error(mut self, error: ItemError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Label every item with the input it was computed from
    pub fn with_source(self, source: &str) -> Self {
        self.into_iter()
            .map(|item| item.with_source(source))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// One `word` item per ranked entry, ranks starting at 1
pub fn ranked_items<'a>(entries: impl IntoIterator<Item = &'a WordCount>) -> ResultSet {
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| ResultItem::word(idx + 1, entry))
        .collect()
}
