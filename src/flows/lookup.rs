//! Lookup commands - one analyzer operation per command
//!
//! Analyzer errors are returned to the caller unchanged; nothing is printed
//! when an operation fails.

use anyhow::Result;

use crate::analyzer::table::fold_word;
use crate::analyzer::{
    frequency_for_word, most_frequent_n, most_frequent_word, tokenize_and_count,
};
use crate::core::input::InputSource;
use crate::core::model::{ranked_items, ResultItem, ResultSet};
use crate::core::render::{emit, RenderConfig};

/// Most frequent word of the text
pub fn highest(text: &str) -> Result<ResultSet> {
    let top = most_frequent_word(text)?;
    Ok(ResultSet::from_iter([ResultItem::highest(&top)]))
}

/// Frequency of a single word
pub fn frequency(text: &str, word: &str) -> Result<ResultSet> {
    let count = frequency_for_word(text, word)?;
    Ok(ResultSet::from_iter([ResultItem::frequency(
        fold_word(word),
        count,
    )]))
}

/// The `n` most frequent words, in rank order
pub fn top(text: &str, n: i64) -> Result<ResultSet> {
    let ranked = most_frequent_n(text, n)?;
    Ok(ranked_items(&ranked))
}

/// Every distinct word, in rank order
pub fn count(text: &str) -> ResultSet {
    ranked_items(&tokenize_and_count(text))
}

fn run_with(
    source: &InputSource,
    config: RenderConfig,
    op: impl FnOnce(&str) -> Result<ResultSet>,
) -> Result<()> {
    let text = source.read()?;
    let result_set = op(&text)?.with_source(&source.label());
    emit(&result_set, config)?;
    Ok(())
}

/// Run the highest command
pub fn run_highest(source: &InputSource, config: RenderConfig) -> Result<()> {
    run_with(source, config, highest)
}

/// Run the freq command
pub fn run_freq(source: &InputSource, word: &str, config: RenderConfig) -> Result<()> {
    run_with(source, config, |text| frequency(text, word))
}

/// Run the top command
pub fn run_top(source: &InputSource, n: i64, config: RenderConfig) -> Result<()> {
    run_with(source, config, |text| top(text, n))
}

/// Run the count command
pub fn run_count(source: &InputSource, config: RenderConfig) -> Result<()> {
    run_with(source, config, |text| Ok(count(text)))
}
