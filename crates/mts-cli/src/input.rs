//! # Event Input
//!
//! Reads a catalogue of moment tensors from a JSON or YAML file. The format
//! is chosen by extension (`.json`, `.yaml`, `.yml`). The document is a list
//! of events; each event is either a bare six-element array or an object:
//!
//! ```json
//! [
//!   [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//!   { "id": "2024-03-01T12:00Z", "components": [0.0, 0.0, 0.0, 1.0, 0.0, 0.0] }
//! ]
//! ```
//!
//! Component order follows the configured [`ComponentLayout`].

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use mts_core::{ComponentLayout, MomentTensor};

/// One record as written in the input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum EventRecord {
    Bare([f64; 6]),
    Named {
        #[serde(default)]
        id: Option<String>,
        components: [f64; 6],
    },
}

/// A parsed event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Caller-supplied identifier, if any.
    pub id: Option<String>,
    /// The event's moment tensor.
    pub tensor: MomentTensor,
}

/// Input document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl InputFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => bail!(
                "cannot infer input format of {} (expected .json, .yaml or .yml)",
                path.display()
            ),
        }
    }
}

/// Parse an event list from text.
pub fn parse_events(text: &str, format: InputFormat, layout: ComponentLayout) -> Result<Vec<Event>> {
    let records: Vec<EventRecord> = match format {
        InputFormat::Json => serde_json::from_str(text).context("malformed JSON event list")?,
        InputFormat::Yaml => serde_yaml::from_str(text).context("malformed YAML event list")?,
    };
    Ok(records
        .into_iter()
        .map(|record| {
            let (id, components) = match record {
                EventRecord::Bare(c) => (None, c),
                EventRecord::Named { id, components } => (id, components),
            };
            Event {
                id,
                tensor: MomentTensor::from_layout(components, layout),
            }
        })
        .collect())
}

/// Read an event list from `path`.
pub fn read_events(path: &Path, layout: ComponentLayout) -> Result<Vec<Event>> {
    let format = InputFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    let events = parse_events(&text, format, layout)
        .with_context(|| format!("failed to parse input: {}", path.display()))?;
    tracing::info!(path = %path.display(), events = events.len(), %layout, "read events");
    Ok(events)
}

/// The tensors of `events`, in order.
pub fn tensors(events: &[Event]) -> Vec<MomentTensor> {
    events.iter().map(|e| e.tensor).collect()
}
