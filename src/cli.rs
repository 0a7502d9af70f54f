//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::input::InputSource;
use crate::core::render::{OutputFormat, RenderConfig};

/// wordcount - case-insensitive word frequency statistics.
#[derive(Parser, Debug)]
#[command(name = "wordcount")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordcount lower-cases a text, splits it on whitespace and counts each word.

Punctuation is kept, so "lake," and "lake" are different words. Words with
equal counts are ranked in the order they first appear.

Every command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line
- json: a single JSON array
- md: human-friendly Markdown
- raw: "word count" lines

Examples:
    wordcount --text "the sun the lake" highest
    wordcount --file notes.txt freq Sun
    cat notes.txt | wordcount top -n 5
    wordcount check -v
"#
)]
pub struct Cli {
    /// Text to analyze.
    #[arg(
        long,
        global = true,
        value_name = "TEXT",
        conflicts_with = "file",
        long_help = "Text to analyze, given inline.\n\n\
If neither --text nor --file is given, the text is read from stdin."
    )]
    pub text: Option<String>,

    /// File to analyze.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        long_help = "Read the text to analyze from a file.\n\n\
Invalid UTF-8 is replaced rather than rejected."
    )]
    pub file: Option<PathBuf>,

    /// Output format (jsonl/json/md/raw).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        env = "WORDCOUNT_FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- raw"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (-v info, -vv debug).
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        long_help = "Increase diagnostic output on stderr.\n\n\
-v logs each analyzer result at info level, -vv adds debug detail.\n\
RUST_LOG overrides this flag when set."
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the most frequent word and its count.
    #[command(long_about = "Report the most frequent word and its count.\n\n\
Fails when the text contains no words.\n\n\
Example:\n\
  wordcount --text \"the sun the lake\" highest\n")]
    Highest,

    /// Report how often a word occurs (case-insensitive).
    #[command(long_about = "Report how often WORD occurs in the text. WORD is\n\
lower-cased before lookup.\n\n\
Fails when WORD does not occur at all.\n\n\
Example:\n\
  wordcount --file notes.txt freq Sun\n")]
    Freq {
        /// Word to look up.
        #[arg(value_name = "WORD")]
        word: String,
    },

    /// List the N most frequent words.
    #[command(long_about = "List the N most frequent words, highest count first.\n\n\
Returns every word when N exceeds the number of distinct words. Negative N\n\
is rejected.\n\n\
Example:\n\
  wordcount --file notes.txt top -n 5\n")]
    Top {
        /// Number of words to list.
        #[arg(
            short = 'n',
            long = "top",
            default_value = "10",
            value_name = "N",
            allow_negative_numbers = true
        )]
        n: i64,
    },

    /// List every distinct word with its count.
    Count,

    /// Summarize the text: totals plus the top words.
    #[command(long_about = "Summarize the text: total words, distinct words, the\n\
most frequent word and the top N ranking.\n\n\
Example:\n\
  wordcount --file notes.txt report --report-format summary\n")]
    Report {
        /// Number of ranked words to include.
        #[arg(short = 'n', long = "top", default_value = "10", value_name = "N")]
        top: usize,

        /// Output format for the report (standard/json/summary/table).
        #[arg(
            long = "report-format",
            value_name = "FORMAT",
            default_value = "standard",
            long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- standard (default): ResultSet in the --format format\n\
- json: the full report as one JSON object\n\
- summary: human-readable summary\n\
- table: Markdown tables"
        )]
        report_format: String,
    },

    /// Run the built-in sample through the analyzer and verify the answers.
    #[command(long_about = "Run the analyzer on a built-in sample text with known\n\
answers and report PASS/FAIL per check. Exits non-zero when a check fails.\n\n\
Example:\n\
  wordcount check -v\n")]
    Check,

    /// Report on several files at once.
    #[command(long_about = "Analyze each FILE independently and emit one report item\n\
per file. Unreadable files produce error items instead of aborting.\n\n\
Example:\n\
  wordcount batch a.txt b.txt --top 3\n")]
    Batch {
        /// Files to analyze.
        #[arg(value_name = "FILES", required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Number of ranked words per file.
        #[arg(short = 'n', long = "top", default_value = "10", value_name = "N")]
        top: usize,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let source = InputSource::from_args(cli.text, cli.file);

    match cli.command {
        Commands::Highest => crate::flows::lookup::run_highest(&source, render_config),

        Commands::Freq { word } => crate::flows::lookup::run_freq(&source, &word, render_config),

        Commands::Top { n } => crate::flows::lookup::run_top(&source, n, render_config),

        Commands::Count => crate::flows::lookup::run_count(&source, render_config),

        Commands::Report { top, report_format } => {
            let report_fmt: crate::flows::report::ReportFormat =
                report_format.parse().unwrap_or_default();
            crate::flows::report::run_report(&source, report_fmt, top, render_config)
        }

        Commands::Check => crate::flows::check::run_check(render_config),

        Commands::Batch { files, top } => {
            crate::flows::batch::run_batch(&files, top, render_config)
        }
    }
}
