//! # mts CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mts_cli::config::MtsConfig;
use mts_cli::decompose::{run_decompose, DecomposeArgs};
use mts_cli::grid::{run_grid, GridArgs};
use mts_cli::hudson::{run_hudson, HudsonArgs};
use mts_cli::map::{run_map, MapArgs};

/// Moment tensor source-type toolkit.
///
/// Decomposes seismic moment tensors into double-couple, CLVD and isotropic
/// fractions, and projects them onto the Hudson source-type plot.
#[derive(Parser, Debug)]
#[command(name = "mts", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decompose each event into DC, CLVD and ISO fractions.
    Decompose(DecomposeArgs),

    /// Project each event onto the Hudson source-type plot.
    Hudson(HudsonArgs),

    /// Map explicit (T, k) pairs onto the Hudson plane.
    Map(MapArgs),

    /// Generate the Hudson reference grid.
    Grid(GridArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mts starting");

    let result = MtsConfig::resolve(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Decompose(args) => run_decompose(args, &config),
        Commands::Hudson(args) => run_hudson(args, &config),
        Commands::Map(args) => run_map(args, &config),
        Commands::Grid(args) => run_grid(args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
