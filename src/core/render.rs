//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultItem, ResultSet, Status};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render to a writer, followed by a newline when output is non-empty
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        // Group by kind
        let mut words = Vec::new();
        let mut lookups = Vec::new();
        let mut checks = Vec::new();
        let mut reports = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Word => words.push(item),
                Kind::Highest | Kind::Frequency => lookups.push(item),
                Kind::Check => checks.push(item),
                Kind::Report => reports.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}", error.code, error.message));
                    if let Some(source) = &item.source {
                        output.push_str(&format!(" (`{}`)", source));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        if !reports.is_empty() {
            output.push_str("## Reports\n\n");
            for item in reports {
                self.render_report_md(&mut output, item);
            }
        }

        if !lookups.is_empty() {
            output.push_str("## Lookups\n\n");
            for item in lookups {
                let label = match item.kind {
                    Kind::Highest => "most frequent",
                    _ => "frequency",
                };
                output.push_str(&format!(
                    "- {} `{}`: {}\n",
                    label,
                    item.word.as_deref().unwrap_or_default(),
                    item.count.unwrap_or_default()
                ));
            }
            output.push('\n');
        }

        if !words.is_empty() {
            output.push_str("## Words\n\n");
            output.push_str("| Rank | Word | Count |\n");
            output.push_str("|------|------|-------|\n");
            for item in words {
                output.push_str(&format!(
                    "| {} | `{}` | {} |\n",
                    item.rank.unwrap_or_default(),
                    item.word.as_deref().unwrap_or_default(),
                    item.count.unwrap_or_default()
                ));
            }
            output.push('\n');
        }

        if !checks.is_empty() {
            output.push_str("## Checks\n\n");
            for item in checks {
                let mark = match item.status {
                    Some(Status::Pass) => "PASS",
                    _ => "FAIL",
                };
                output.push_str(&format!(
                    "- **{}** {}\n",
                    mark,
                    item.excerpt.as_deref().unwrap_or_default()
                ));
                for error in &item.errors {
                    output.push_str(&format!("  - {}: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        output
    }

    fn render_report_md(&self, output: &mut String, item: &ResultItem) {
        if let Some(source) = &item.source {
            output.push_str(&format!("### `{}`\n", source));
        }

        if let Some(excerpt) = &item.excerpt {
            output.push_str("\n```\n");
            output.push_str(excerpt);
            if !excerpt.ends_with('\n') {
                output.push('\n');
            }
            output.push_str("```\n");
        }

        output.push('\n');
    }

    /// Render as raw output: `word count` lines, excerpts verbatim
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| match (&item.word, item.count) {
                (Some(word), Some(count)) => Some(format!("{} {}", word, count)),
                _ => item.excerpt.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a result set to stdout
pub fn emit(result_set: &ResultSet, config: RenderConfig) -> std::io::Result<()> {
    let renderer = Renderer::with_config(config);
    renderer.render_to(result_set, std::io::stdout().lock())
}
