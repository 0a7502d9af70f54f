//! Flows module - Commands built on the analyzer
//!
//! Provides:
//! - lookup: highest / freq / top / count, one analyzer operation each
//! - report: totals plus the ranked table for one text
//! - check: self-check against the built-in sample
//! - batch: one report per file, optionally in parallel

pub mod batch;
pub mod check;
pub mod lookup;
pub mod report;
