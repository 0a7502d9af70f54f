//! Analyzer error taxonomy

use thiserror::Error;

/// Failures surfaced by the frequency operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// The text contains no words to rank
    #[error("text contains no words")]
    EmptyInput,

    /// The queried word never appears in the text
    #[error("word not found: {word}")]
    WordNotFound { word: String },

    /// A negative count was requested from a ranking
    #[error("invalid argument: n must be non-negative, got {n}")]
    InvalidArgument { n: i64 },
}

impl AnalyzerError {
    /// Stable machine-readable code, used in rendered error items
    pub fn code(&self) -> &'static str {
        match self {
            AnalyzerError::EmptyInput => "EMPTY_INPUT",
            AnalyzerError::WordNotFound { .. } => "WORD_NOT_FOUND",
            AnalyzerError::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}
