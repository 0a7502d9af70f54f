//! Input resolution
//!
//! Text comes from exactly one place: an inline `--text` argument, a
//! `--file`, or stdin. Files and stdin are decoded as UTF-8, falling back to
//! lossy conversion for invalid bytes.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Where the text to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from the global CLI options; inline text wins over a file
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => InputSource::Inline(text),
            (None, Some(path)) => InputSource::File(path),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Short label for result items
    pub fn label(&self) -> String {
        match self {
            InputSource::Inline(_) => "inline".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    /// Load the full text into memory
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => read_text_file(path),
            InputSource::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(decode(buffer, "stdin"))
            }
        }
    }
}

/// Read a whole file as text
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(decode(bytes, &path.display().to_string()))
}

fn decode(bytes: Vec<u8>, label: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{} is not valid UTF-8, using lossy conversion", label);
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}
