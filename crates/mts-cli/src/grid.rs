//! # Grid — Hudson reference lattice polylines.
//!
//! ```bash
//! mts grid
//! mts grid --step 0.25 --format yaml
//! ```

use anyhow::Result;
use clap::Args;

use mts_hudson::HudsonGrid;

use crate::config::MtsConfig;
use crate::output::OutputArgs;

/// Arguments for `mts grid`.
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Lattice spacing in [0.001, 1] (overrides the config file).
    #[arg(long)]
    pub step: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute the grid subcommand.
pub fn run_grid(args: &GridArgs, config: &MtsConfig) -> Result<u8> {
    let step = args.step.unwrap_or(config.grid.step);
    let grid = HudsonGrid::with_step(step)?;
    args.output.emit(&grid, &config.output)?;
    Ok(0)
}
