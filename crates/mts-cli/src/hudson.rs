//! # Hudson — source type and plot position per event.
//!
//! ```bash
//! mts hudson catalogue.json --out hudson.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mts_core::ComponentLayout;
use mts_hudson::project_batch;

use crate::config::MtsConfig;
use crate::input::{read_events, tensors};
use crate::output::OutputArgs;

/// Arguments for `mts hudson`.
#[derive(Args, Debug)]
pub struct HudsonArgs {
    /// Event file (.json, .yaml or .yml).
    pub input: PathBuf,

    /// Six-component ordering of the input (overrides the config file).
    #[arg(long)]
    pub layout: Option<ComponentLayout>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// One projected event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudsonRecord {
    /// Position of the event in the input file.
    pub index: usize,
    /// Event identifier, when the input gave one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source-type T.
    pub tau: f64,
    /// Source-type k.
    pub k: f64,
    /// Horizontal plot coordinate.
    pub u: f64,
    /// Vertical plot coordinate.
    pub v: f64,
}

/// Execute the hudson subcommand.
pub fn run_hudson(args: &HudsonArgs, config: &MtsConfig) -> Result<u8> {
    let layout = args.layout.unwrap_or(config.input.layout);
    let events = read_events(&args.input, layout)?;

    let projected = project_batch(&tensors(&events), &config.solver.solver())?;

    let records: Vec<HudsonRecord> = events
        .into_iter()
        .zip(projected)
        .enumerate()
        .map(|(index, (event, (source, point)))| HudsonRecord {
            index,
            id: event.id,
            tau: source.tau,
            k: source.k,
            u: point.u,
            v: point.v,
        })
        .collect();

    args.output.emit(&records, &config.output)?;
    Ok(0)
}
