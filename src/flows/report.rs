//! Report flow - totals plus the ranked table for one text
//!
//! Provides token count, distinct word count, the top word and the top-N
//! ranking in a single pass over the text.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::analyzer::{tokenize_and_count, RankedFrequencyTable};
use crate::core::input::InputSource;
use crate::core::model::{ranked_items, ResultItem, ResultSet};
use crate::core::render::{emit, RenderConfig};

/// Word statistics for one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    /// Input label
    pub source: String,
    /// Total number of tokens
    pub total_words: usize,
    /// Number of distinct case-folded words
    pub distinct_words: usize,
    /// Most frequent word (absent for empty text)
    pub top_word: Option<String>,
    /// Count of the most frequent word
    pub top_count: Option<usize>,
    /// The highest-ranked words
    pub ranked: RankedFrequencyTable,
}

impl TextReport {
    /// Analyze `text`, keeping the `top_n` highest-ranked words
    pub fn from_text(source: impl Into<String>, text: &str, top_n: usize) -> Self {
        let ranked = tokenize_and_count(text);
        let total_words: usize = ranked.iter().map(|entry| entry.count).sum();
        let distinct_words = ranked.len();
        let top = ranked.first().cloned();

        Self {
            source: source.into(),
            total_words,
            distinct_words,
            top_word: top.as_ref().map(|entry| entry.word.clone()),
            top_count: top.map(|entry| entry.count),
            ranked: ranked.truncate(top_n),
        }
    }

    /// Multi-line human-readable summary
    pub fn summary(&self) -> String {
        let top = match (&self.top_word, self.top_count) {
            (Some(word), Some(count)) => format!("{} ({})", word, count),
            _ => "-".to_string(),
        };
        format!(
            "Source:       {}\n\
             Words:        {}\n\
             Distinct:     {}\n\
             Top word:     {}",
            self.source, self.total_words, self.distinct_words, top
        )
    }

    /// Report item with the totals as structured data
    pub fn to_item(&self) -> ResultItem {
        ResultItem::report(self.summary())
            .with_source(self.source.as_str())
            .with_data(serde_json::json!({
                "total_words": self.total_words,
                "distinct_words": self.distinct_words,
                "top_word": self.top_word,
                "top_count": self.top_count,
            }))
    }
}

/// Convert a report to ResultSet for rendering
fn report_to_result_set(report: &TextReport) -> ResultSet {
    let mut result_set = ResultSet::new();
    result_set.push(report.to_item());
    result_set.extend(ranked_items(&report.ranked).with_source(&report.source));
    result_set
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Standard ResultSet format (respects --format flag)
    #[default]
    Standard,
    /// JSON object with the full report
    Json,
    /// Human-readable summary
    Summary,
    /// Markdown table format
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "default" => Ok(ReportFormat::Standard),
            "json" => Ok(ReportFormat::Json),
            "summary" => Ok(ReportFormat::Summary),
            "table" | "md" => Ok(ReportFormat::Table),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Render a report in the requested format
pub fn render_report(
    report: &TextReport,
    report_format: ReportFormat,
    config: RenderConfig,
) -> Result<()> {
    match report_format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            println!("{}", json);
        }
        ReportFormat::Summary => {
            println!("Word Frequency Report");
            println!("═══════════════════════════════════════");
            println!("{}", report.summary());
            println!("═══════════════════════════════════════");

            if !report.ranked.is_empty() {
                println!("\nTop {} Words:", report.ranked.len());
                for (idx, entry) in report.ranked.iter().enumerate() {
                    println!("  {:>3}. {:30} {:>6}", idx + 1, entry.word, entry.count);
                }
            }
        }
        ReportFormat::Table => {
            println!("# Word Frequency Report\n");
            println!("| Metric | Value |");
            println!("|--------|-------|");
            println!("| Source | {} |", report.source);
            println!("| Words | {} |", report.total_words);
            println!("| Distinct words | {} |", report.distinct_words);

            if !report.ranked.is_empty() {
                println!("\n## Top Words\n");
                println!("| Rank | Word | Count |");
                println!("|------|------|-------|");
                for (idx, entry) in report.ranked.iter().enumerate() {
                    println!("| {} | {} | {} |", idx + 1, entry.word, entry.count);
                }
            }
        }
        ReportFormat::Standard => {
            emit(&report_to_result_set(report), config)?;
        }
    }

    Ok(())
}

/// Run the report command
pub fn run_report(
    source: &InputSource,
    report_format: ReportFormat,
    top_n: usize,
    config: RenderConfig,
) -> Result<()> {
    let text = source.read()?;
    let report = TextReport::from_text(source.label(), &text, top_n);
    render_report(&report, report_format, config)
}
