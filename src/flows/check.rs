//! Check flow - self-check against a known sample
//!
//! Runs the analyzer operations on a fixed text with known answers and
//! reports one PASS/FAIL item per check.

use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt::Debug;

use crate::analyzer::table::fold_word;
use crate::analyzer::{
    frequency_for_word, highest_frequency, most_frequent_n, AnalyzerError, WordCount,
};
use crate::core::model::{ItemError, ResultItem, ResultSet, Status};
use crate::core::render::{emit, RenderConfig};

/// A sample text together with the expected analyzer answers
#[derive(Debug, Clone)]
pub struct Sample {
    pub text: String,
    pub word: String,
    pub n: i64,
    pub expected_highest: usize,
    pub expected_frequency: usize,
    pub expected_top: Vec<WordCount>,
    /// A word that must not be found
    pub missing_word: String,
}

impl Sample {
    /// The built-in sample
    pub fn reference() -> Self {
        Self {
            text: "The sun shines sUN sUn SUN SUN SUNN over the lake LAKe lake lake lake lake"
                .to_string(),
            word: "sUN".to_string(),
            n: 2,
            expected_highest: 6,
            expected_frequency: 5,
            expected_top: vec![("lake", 6).into(), ("sun", 5).into()],
            missing_word: "zebra".to_string(),
        }
    }
}

fn expect_value<T>(name: &str, actual: Result<T, AnalyzerError>, expected: T) -> ResultItem
where
    T: PartialEq + Debug + Serialize,
{
    let data = serde_json::json!({ "expected": expected });
    match actual {
        Ok(value) if value == expected => {
            ResultItem::check(name, Status::Pass).with_data(data)
        }
        Ok(value) => ResultItem::check(name, Status::Fail)
            .with_data(serde_json::json!({ "expected": expected, "actual": value }))
            .with_error(ItemError::new(
                "MISMATCH",
                format!("expected {:?}, got {:?}", expected, value),
            )),
        Err(err) => ResultItem::check(name, Status::Fail)
            .with_data(data)
            .with_error(ItemError::from(&err)),
    }
}

fn expect_error<T: Debug>(
    name: &str,
    actual: Result<T, AnalyzerError>,
    expected: AnalyzerError,
) -> ResultItem {
    let data = serde_json::json!({ "expected": expected.code() });
    match actual {
        Err(err) if err == expected => ResultItem::check(name, Status::Pass).with_data(data),
        Err(err) => ResultItem::check(name, Status::Fail)
            .with_data(data)
            .with_error(ItemError::from(&err)),
        Ok(value) => ResultItem::check(name, Status::Fail)
            .with_data(data)
            .with_error(ItemError::new(
                "MISMATCH",
                format!("expected {}, got {:?}", expected.code(), value),
            )),
    }
}

/// Run every check against `sample`
pub fn run_checks(sample: &Sample) -> ResultSet {
    let mut result_set = ResultSet::new();

    result_set.push(expect_value(
        "highest_frequency",
        highest_frequency(&sample.text),
        sample.expected_highest,
    ));

    result_set.push(expect_value(
        "frequency_for_word",
        frequency_for_word(&sample.text, &sample.word),
        sample.expected_frequency,
    ));

    result_set.push(expect_value(
        "most_frequent_n",
        most_frequent_n(&sample.text, sample.n).map(|top| top.entries().to_vec()),
        sample.expected_top.clone(),
    ));

    result_set.push(expect_error(
        "frequency_for_missing_word",
        frequency_for_word(&sample.text, &sample.missing_word),
        AnalyzerError::WordNotFound {
            word: fold_word(&sample.missing_word),
        },
    ));

    result_set.push(expect_error(
        "highest_frequency_empty_text",
        highest_frequency(""),
        AnalyzerError::EmptyInput,
    ));

    result_set
}

/// Run the check command; fails when any check fails
pub fn run_check(config: RenderConfig) -> Result<()> {
    let result_set = run_checks(&Sample::reference());
    emit(&result_set, config)?;

    let failed = result_set
        .items
        .iter()
        .filter(|item| item.status != Some(Status::Pass))
        .count();
    if failed > 0 {
        bail!("{} of {} checks failed", failed, result_set.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sample_passes() {
        let result_set = run_checks(&Sample::reference());
        assert_eq!(result_set.len(), 5);
        for item in &result_set.items {
            assert_eq!(item.status, Some(Status::Pass), "{:?}", item.excerpt);
            assert!(item.errors.is_empty());
        }
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let sample = Sample {
            expected_highest: 7,
            ..Sample::reference()
        };
        let result_set = run_checks(&sample);
        let item = &result_set.items[0];
        assert_eq!(item.status, Some(Status::Fail));
        assert_eq!(item.errors[0].code, "MISMATCH");
        assert_eq!(item.data.as_ref().unwrap()["actual"], 6);
    }

    #[test]
    fn test_present_missing_word_fails() {
        let sample = Sample {
            missing_word: "LAKE".to_string(),
            ..Sample::reference()
        };
        let result_set = run_checks(&sample);
        let item = &result_set.items[3];
        assert_eq!(item.status, Some(Status::Fail));
        assert!(item.errors[0].message.contains("got 6"));
    }

    #[test]
    fn test_analyzer_error_is_reported() {
        let sample = Sample {
            word: "moon".to_string(),
            ..Sample::reference()
        };
        let result_set = run_checks(&sample);
        let item = &result_set.items[1];
        assert_eq!(item.status, Some(Status::Fail));
        assert_eq!(item.errors[0].code, "WORD_NOT_FOUND");
    }
}
