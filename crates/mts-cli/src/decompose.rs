//! # Decompose — DC / CLVD / ISO fractions per event.
//!
//! ```bash
//! mts decompose catalogue.json
//! mts decompose catalogue.yaml --layout upper-triangle --format yaml --out fractions.yaml
//! ```
//!
//! Each output record carries the event's index, its id (when given), the
//! signed fractions, and its position on the diamond plot.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mts_core::ComponentLayout;
use mts_decomp::{Decomposer, DecompositionResult, DiamondPoint};

use crate::config::MtsConfig;
use crate::input::{read_events, tensors};
use crate::output::OutputArgs;

/// Arguments for `mts decompose`.
#[derive(Args, Debug)]
pub struct DecomposeArgs {
    /// Event file (.json, .yaml or .yml).
    pub input: PathBuf,

    /// Six-component ordering of the input (overrides the config file).
    #[arg(long)]
    pub layout: Option<ComponentLayout>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// One decomposed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecomposeRecord {
    /// Position of the event in the input file.
    pub index: usize,
    /// Event identifier, when the input gave one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Signed fractions, written inline as `dc`, `clvd`, `iso`.
    #[serde(flatten)]
    pub fractions: DecompositionResult,
    /// Diamond-plot position.
    pub diamond: DiamondPoint,
}

/// Execute the decompose subcommand.
pub fn run_decompose(args: &DecomposeArgs, config: &MtsConfig) -> Result<u8> {
    let layout = args.layout.unwrap_or(config.input.layout);
    let events = read_events(&args.input, layout)?;

    let decomposer = Decomposer::with_solver(config.solver.solver());
    let results = decomposer.decompose_batch(&tensors(&events))?;

    let records: Vec<DecomposeRecord> = events
        .into_iter()
        .zip(results)
        .enumerate()
        .map(|(index, (event, fractions))| DecomposeRecord {
            index,
            id: event.id,
            fractions,
            diamond: fractions.diamond_point(),
        })
        .collect();

    args.output.emit(&records, &config.output)?;
    Ok(0)
}
