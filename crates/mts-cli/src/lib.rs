//! # mts-cli — Moment Tensor Source-Type CLI
//!
//! Provides the `mts` command-line interface over the decomposition and
//! Hudson-projection libraries.
//!
//! ## Subcommands
//!
//! - `mts decompose` — DC / CLVD / ISO fractions and diamond-plot points.
//! - `mts hudson` — Source type (T, k) and Hudson-plot position.
//! - `mts map` — Map explicit (T, k) pairs.
//! - `mts grid` — Reference grid polylines.
//!
//! ```bash
//! mts decompose catalogue.json
//! mts hudson catalogue.yaml --layout upper-triangle --format yaml
//! mts map --tau -1,0,1 --k 0,1,0 --compact
//! mts -v --config mts.yaml grid --out grid.json
//! ```

pub mod config;
pub mod decompose;
pub mod grid;
pub mod hudson;
pub mod input;
pub mod map;
pub mod output;
