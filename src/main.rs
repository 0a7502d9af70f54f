//! wordcount - case-insensitive word frequency statistics
//!
//! wordcount provides:
//! - Word counts with stable ranking (ties keep first-occurrence order)
//! - Most frequent word, single-word lookup and top-N queries
//! - Text reports, batch reports over many files and a built-in self-check
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;

mod analyzer;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    crate::core::logging::init_tracing(cli.verbose, cli.quiet);
    cli::run(cli)
}
