//! # Map — explicit (T, k) pairs onto the Hudson plane.
//!
//! ```bash
//! mts map --tau -1,0,1 --k 0,1,0
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mts_hudson::map;

use crate::config::MtsConfig;
use crate::output::OutputArgs;

/// Arguments for `mts map`.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Comma-separated T values.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub tau: Vec<f64>,

    /// Comma-separated k values, one per T value.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub k: Vec<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Mapped coordinates, parallel to the inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOutput {
    /// Horizontal coordinates, one per input pair.
    pub u: Vec<f64>,
    /// Vertical coordinates, one per input pair.
    pub v: Vec<f64>,
}

/// Execute the map subcommand.
pub fn run_map(args: &MapArgs, config: &MtsConfig) -> Result<u8> {
    let (u, v) = map(&args.tau, &args.k)?;
    tracing::info!(points = u.len(), "mapped source-type pairs");
    args.output.emit(&MapOutput { u, v }, &config.output)?;
    Ok(0)
}
