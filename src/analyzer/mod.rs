//! Analyzer module - Case-insensitive word frequency statistics
//!
//! Provides:
//! - table: tokenization, the unordered count table and the ranked table
//! - ops: tokenize_and_count, highest_frequency, frequency_for_word, most_frequent_n
//! - error: the analyzer error taxonomy

pub mod error;
pub mod ops;
pub mod table;

pub use error::AnalyzerError;
pub use ops::{
    frequency_for_word, highest_frequency, most_frequent_n, most_frequent_word,
    tokenize_and_count,
};
pub use table::{RankedFrequencyTable, WordCount};
