//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultItem, ResultSet};
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

    /// Render to a writer
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        writer.write_all(output.as_bytes())?;
        if !output.is_empty() && !output.ends_with('\n') {
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
        let mut infos = Vec::new();
        let mut pages = Vec::new();
        let mut entries = Vec::new();
        let mut hits = Vec::new();
        let mut groups = Vec::new();
        let mut facets = Vec::new();
        let mut keys = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Info => infos.push(item),
                Kind::Page => pages.push(item),
                Kind::Entry => entries.push(item),
                Kind::Hit => hits.push(item),
                Kind::Group => groups.push(item),
                Kind::Facet => facets.push(item),
                Kind::SortKey => keys.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !infos.is_empty() {
            output.push_str("## Document\n\n");
            for item in infos {
                if let Some(serde_json::Value::Object(fields)) = &item.data {
                    for (key, value) in fields {
                        output.push_str(&format!("- **{}**: {}\n", key, inline_value(value)));
                    }
                }
            }
            output.push('\n');
        }

        if !pages.is_empty() {
            for item in pages {
                self.render_item_md(&mut output, item);
            }
        }

        if !entries.is_empty() {
            output.push_str(&format!("## Entries ({})\n\n", entries.len()));
            for item in entries {
                self.render_item_md(&mut output, item);
            }
        }

        if !hits.is_empty() {
            output.push_str(&format!("## Search Results ({})\n\n", hits.len()));
            for item in hits {
                self.render_item_md(&mut output, item);
            }
        }

        if !groups.is_empty() {
            output.push_str("## Contents\n\n");
            for item in groups {
                output.push_str(&format!("### {}\n\n", item.title.as_deref().unwrap_or("")));
                if let Some(serde_json::Value::Array(members)) = &item.data {
                    for member in members {
                        let id = member["id"].as_str().unwrap_or("");
                        let term = member["term"].as_str().unwrap_or("");
                        output.push_str(&format!("- `{}` {}\n", id, term));
                    }
                }
                output.push('\n');
            }
        }

        if !facets.is_empty() {
            output.push_str("## Facets\n\n");
            for item in facets {
                let values = item.data.as_ref().map(inline_value).unwrap_or_default();
                output.push_str(&format!(
                    "- **{}**: {}\n",
                    item.title.as_deref().unwrap_or(""),
                    values
                ));
            }
            output.push('\n');
        }

        if !keys.is_empty() {
            output.push_str("## Sort Keys\n\n");
            for item in keys {
                output.push_str(&format!(
                    "- `{}` → `{}`\n",
                    item.id.as_deref().unwrap_or(""),
                    item.excerpt.as_deref().unwrap_or("")
                ));
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        output.push_str("### ");
        if item.kind == Kind::Page {
            output.push_str(item.title.as_deref().unwrap_or(""));
        } else {
            if let Some(id) = &item.id {
                output.push_str(&format!("§{}. ", id));
            }
            output.push_str(item.title.as_deref().unwrap_or(""));
            if let Some(score) = item.score {
                output.push_str(&format!(" (score {})", score));
            }
        }
        output.push('\n');

        if let Some(pos) = item
            .data
            .as_ref()
            .and_then(|d| d["partOfSpeech"].as_str())
            .filter(|p| !p.is_empty())
        {
            output.push_str(&format!("\n*{}*\n", pos));
        }

        if let Some(excerpt) = &item.excerpt {
            output.push('\n');
            output.push_str(excerpt);
            if !excerpt.ends_with('\n') {
                output.push('\n');
            }
        }

        if item.meta.truncated {
            output.push_str("\n> ⚠️ Content was truncated\n");
        }

        if let Some(link) = &item.link {
            output.push_str(&format!("\n[link]({})\n", link));
        }

        output.push('\n');
    }

    /// Render as raw output (for debugging)
    fn render_raw(&self, result_set: &ResultSet) -> String {
        // Raw mode: just output excerpts directly
        result_set
            .items
            .iter()
            .filter_map(|item| item.excerpt.clone())
            .collect::<Vec<_>>()
            .join("\n---\n")
    }
}

/// Compact one-line rendering of a JSON value for Markdown bullets
fn inline_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(inline_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
