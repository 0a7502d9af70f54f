use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "The sun shines sUN sUn SUN SUN SUNN over the lake LAKe lake lake lake lake";

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn wordcount() -> Command {
    Command::cargo_bin("wordcount").expect("Failed to find wordcount binary")
}

fn word_counts(items: &[Value]) -> Vec<(String, u64)> {
    items
        .iter()
        .map(|v| {
            (
                v["word"].as_str().unwrap().to_string(),
                v["count"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[test]
fn highest_reports_top_word() {
    let assert = wordcount()
        .arg("--text")
        .arg(SAMPLE)
        .arg("highest")
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "highest");
    assert_eq!(items[0]["word"], "lake");
    assert_eq!(items[0]["count"], 6);
    assert_eq!(items[0]["source"], "inline");
}

#[test]
fn highest_on_empty_text_fails() {
    wordcount()
        .arg("--text")
        .arg("   ")
        .arg("highest")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("text contains no words"));
}

#[test]
fn freq_is_case_insensitive() {
    let assert = wordcount()
        .args(["--text", SAMPLE, "freq", "sUN"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["kind"], "frequency");
    assert_eq!(items[0]["word"], "sun");
    assert_eq!(items[0]["count"], 5);
}

#[test]
fn freq_missing_word_fails() {
    wordcount()
        .args(["--text", SAMPLE, "freq", "zebra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("word not found: zebra"));
}

#[test]
fn top_returns_ordered_pairs() {
    let assert = wordcount()
        .args(["--text", SAMPLE, "top", "-n", "2"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(
        word_counts(&items),
        vec![("lake".to_string(), 6), ("sun".to_string(), 5)]
    );
    assert_eq!(items[0]["rank"], 1);
    assert_eq!(items[1]["rank"], 2);
}

#[test]
fn top_larger_than_vocabulary_returns_all() {
    let assert = wordcount()
        .args(["--text", SAMPLE, "top", "-n", "50"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 6);
}

#[test]
fn top_zero_prints_nothing() {
    wordcount()
        .args(["--text", SAMPLE, "top", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn top_negative_is_rejected() {
    wordcount()
        .args(["--text", SAMPLE, "top", "-n", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn count_reads_stdin_and_keeps_tie_order() {
    let assert = wordcount()
        .arg("count")
        .write_stdin("pear apple Pear APPLE fig")
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(
        word_counts(&items),
        vec![
            ("pear".to_string(), 2),
            ("apple".to_string(), 2),
            ("fig".to_string(), 1)
        ]
    );
    assert_eq!(items[0]["source"], "stdin");
}

#[test]
fn count_reads_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("text.txt");
    fs::write(&path, "lake, lake LAKE").unwrap();

    let assert = wordcount()
        .arg("--file")
        .arg(&path)
        .arg("count")
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(
        word_counts(&items),
        vec![("lake".to_string(), 2), ("lake,".to_string(), 1)]
    );
}

#[test]
fn missing_file_fails() {
    wordcount()
        .args(["--file", "/nonexistent/words.txt", "count"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn raw_format_prints_word_count_lines() {
    wordcount()
        .args(["--text", SAMPLE, "--format", "raw", "top", "-n", "2"])
        .assert()
        .success()
        .stdout("lake 6\nsun 5\n");
}

#[test]
fn markdown_format_renders_table() {
    wordcount()
        .args(["--text", SAMPLE, "--format", "md", "top", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | `lake` | 6 |"));
}

#[test]
fn format_from_environment() {
    let assert = wordcount()
        .env("WORDCOUNT_FORMAT", "json")
        .args(["--text", SAMPLE, "top", "-n", "2"])
        .assert()
        .success();
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(output.as_array().unwrap().len(), 2);
}

#[test]
fn verbose_logs_analyzer_results() {
    wordcount()
        .env_remove("RUST_LOG")
        .args(["-v", "--text", SAMPLE, "highest"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "The most frequent word is 'lake', 6 times",
        ));
}

#[test]
fn without_verbose_logs_are_suppressed() {
    wordcount()
        .env_remove("RUST_LOG")
        .args(["--text", SAMPLE, "highest"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn check_passes_on_reference_sample() {
    let assert = wordcount().arg("check").assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|item| item["status"] == "pass"));
}

#[test]
fn report_summary_format() {
    wordcount()
        .args(["--text", SAMPLE, "report", "--report-format", "summary", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:        16"))
        .stdout(predicate::str::contains("Top word:     lake (6)"))
        .stdout(predicate::str::contains("Top 2 Words:"));
}

#[test]
fn report_json_format() {
    let assert = wordcount()
        .args(["--text", SAMPLE, "report", "--report-format", "json"])
        .assert()
        .success();
    let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(report["total_words"], 16);
    assert_eq!(report["distinct_words"], 6);
    assert_eq!(report["ranked"][1]["word"], "sun");
}

#[test]
fn batch_reports_each_file() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a.txt");
    let b = temp.path().join("b.txt");
    fs::write(&a, SAMPLE).unwrap();
    fs::write(&b, "moon Moon star").unwrap();
    let missing = temp.path().join("missing.txt");

    let assert = wordcount()
        .arg("batch")
        .arg(&a)
        .arg(&b)
        .arg(&missing)
        .args(["--top", "1"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["kind"], "report");
    assert_eq!(items[0]["data"]["top_word"], "lake");
    assert_eq!(items[1]["data"]["top_word"], "moon");
    assert_eq!(items[1]["data"]["top_count"], 2);
    assert_eq!(items[2]["kind"], "error");
    assert_eq!(items[2]["errors"][0]["code"], "READ_FAILED");
}
