//! Frequency operations
//!
//! Every operation is a pure function of its arguments: the tables are built
//! from the text on each call and dropped when the call returns.

use tracing::{debug, info};

use super::error::AnalyzerError;
use super::table::{fold_word, FrequencyTable, RankedFrequencyTable, WordCount};

/// Count the words of `text` and rank them
///
/// Ranking is by descending count; words with equal counts keep the order in
/// which they first appear. Empty or whitespace-only text gives an empty
/// table.
pub fn tokenize_and_count(text: &str) -> RankedFrequencyTable {
    let table = FrequencyTable::from_text(text);
    debug!(
        tokens = table.total(),
        distinct = table.len(),
        "built frequency table"
    );
    table.ranked()
}

/// The highest-ranked word together with its count
pub fn most_frequent_word(text: &str) -> Result<WordCount, AnalyzerError> {
    let ranked = tokenize_and_count(text);
    let top = ranked.first().cloned().ok_or(AnalyzerError::EmptyInput)?;
    info!("The most frequent word is '{}', {} times", top.word, top.count);
    Ok(top)
}

/// Count of the most frequent word
///
/// Fails with [`AnalyzerError::EmptyInput`] when `text` has no words.
pub fn highest_frequency(text: &str) -> Result<usize, AnalyzerError> {
    most_frequent_word(text).map(|top| top.count)
}

/// Exact number of occurrences of `word` in `text`, compared case-insensitively
///
/// Absence is an error, not zero.
pub fn frequency_for_word(text: &str, word: &str) -> Result<usize, AnalyzerError> {
    let table = FrequencyTable::from_text(text);
    let folded = fold_word(word);
    let count = table
        .get(&folded)
        .ok_or_else(|| AnalyzerError::WordNotFound {
            word: folded.clone(),
        })?;
    info!("Frequency of '{}': {} times", folded, count);
    Ok(count)
}

/// The first `n` entries of the ranking
///
/// Returns every word when `n` exceeds the number of distinct words and an
/// empty table for `n == 0`. Negative `n` is rejected.
pub fn most_frequent_n(text: &str, n: i64) -> Result<RankedFrequencyTable, AnalyzerError> {
    let limit = usize::try_from(n).map_err(|_| AnalyzerError::InvalidArgument { n })?;
    let top = tokenize_and_count(text).truncate(limit);
    info!("Most frequent {} words: {:?}", n, top.pairs());
    Ok(top)
}
