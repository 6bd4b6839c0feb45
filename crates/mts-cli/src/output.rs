//! # Output Rendering
//!
//! Serializes command results as JSON or YAML to stdout or a file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::OutputConfig;

/// Serialization format for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document.
    #[default]
    Json,
    /// YAML document.
    Yaml,
}

/// Output flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit compact JSON.
    #[arg(long)]
    pub compact: bool,
}

impl OutputArgs {
    /// Effective (format, pretty) after applying flags over `config`.
    pub fn resolve(&self, config: &OutputConfig) -> (OutputFormat, bool) {
        let format = self.format.unwrap_or(config.format);
        let pretty = config.pretty && !self.compact;
        (format, pretty)
    }

    /// Render `value` and write it to the configured destination.
    pub fn emit<T: Serialize>(&self, value: &T, config: &OutputConfig) -> Result<()> {
        let (format, pretty) = self.resolve(config);
        let text = render(value, format, pretty)?;
        write_output(&text, self.out.as_deref())
    }
}

/// Render `value` in `format`.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> Result<String> {
    let mut text = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

fn write_output(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}
