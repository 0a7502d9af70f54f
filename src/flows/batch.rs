//! Batch flow - one report per file
//!
//! Every file is analyzed independently. With the `parallel` feature the
//! files are spread over the rayon thread pool; output order always follows
//! the order of the arguments.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::input::read_text_file;
use crate::core::model::{ItemError, ResultItem, ResultSet};
use crate::core::render::{emit, RenderConfig};
use crate::flows::report::TextReport;

/// Analyze one file, turning read failures into an error item
fn analyze_file(path: &Path, top_n: usize) -> ResultItem {
    let label = path.display().to_string();
    match read_text_file(path) {
        Ok(text) => {
            let report = TextReport::from_text(label, &text, top_n);
            debug!(source = %report.source, words = report.total_words, "analyzed file");
            report.to_item().with_data(
                serde_json::to_value(&report).unwrap_or(serde_json::Value::Null),
            )
        }
        Err(err) => {
            ResultItem::error(ItemError::new("READ_FAILED", format!("{:#}", err))).with_source(label)
        }
    }
}

/// Analyze every file in `paths`
pub fn analyze_files(paths: &[PathBuf], top_n: usize) -> ResultSet {
    #[cfg(feature = "parallel")]
    let items: Vec<ResultItem> = paths
        .par_iter()
        .map(|path| analyze_file(path, top_n))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let items: Vec<ResultItem> = paths
        .iter()
        .map(|path| analyze_file(path, top_n))
        .collect();

    ResultSet::from_iter(items)
}

/// Run the batch command
pub fn run_batch(paths: &[PathBuf], top_n: usize, config: RenderConfig) -> Result<()> {
    let result_set = analyze_files(paths, top_n);
    emit(&result_set, config)?;
    Ok(())
}
