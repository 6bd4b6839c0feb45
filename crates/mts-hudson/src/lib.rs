//! # mts-hudson — Hudson Source-Type Plot
//!
//! Projects moment tensors onto the Hudson, Pearce & Rogers (1989) plot.
//!
//! - **Source type** (`source_type.rs`): the eigenvalue-ratio coordinates
//!   (T, k) of a tensor. k measures the isotropic share, T the CLVD share of
//!   the deviatoric part.
//!
//! - **Mapping** (`mapping.rs`): the four-quadrant piecewise rational map
//!   from (τ, k) to the skewed (u, v) plotting plane.
//!
//! - **Grid** (`grid.rs`): the reference lattice of constant-T and
//!   constant-k lines, pushed through the same mapping.
//!
//! ## Mathematical Definition
//!
//! ```text
//! s = τ · (1 − |k|)
//!
//! off-diagonal  (s>0, k<0) ∪ (s<0, k>0)   u = s            v = k
//! Q1 region A   s<4k,  s≥0, k≥0           u = s/(1−s/2)    v = k/(1−s/2)
//! Q1 region B   s≥4k,  s≥0, k≥0           u = s/(1−2k)     v = k/(1−2k)
//! Q3 region A   s≥4k,  s≤0, k≤0           u = s/(1+s/2)    v = k/(1+s/2)
//! Q3 region B   s<4k,  s≤0, k≤0           u = s/(1+2k)     v = k/(1+2k)
//! ```
//!
//! A pair captured by no region (NaN input) is a [`mts_core::DomainError`];
//! so is a region formula that evaluates to a non-finite coordinate.

pub mod grid;
pub mod mapping;
pub mod source_type;

pub use grid::{GridAxis, GridLine, HudsonGrid};
pub use mapping::{map, map_point, HudsonPoint, HudsonRegion};
pub use source_type::{project, project_batch, SourceType};
