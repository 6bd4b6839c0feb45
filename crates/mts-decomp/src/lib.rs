//! # mts-decomp — Moment Tensor Decomposition
//!
//! Splits a moment tensor into isotropic (ISO), double-couple (DC) and
//! compensated linear vector dipole (CLVD) fractions.
//!
//! - **Decomposition** (`decomposition.rs`): the Jost & Herrmann (1989)
//!   standard decomposition, followed by an external sign rule for the CLVD
//!   and ISO fractions.
//!
//! - **Diamond** (`diamond.rs`): the scatter position of a decomposed event
//!   on the ISO/CLVD diamond plot.
//!
//! ## Sign Convention
//!
//! With eigenvalues (M1, M2, M3) in solver order, the CLVD fraction is
//! positive iff `M1 + M3 − 2·M2 > 0`, and the ISO fraction is positive iff
//! the trace is positive. Exact zeros resolve negative. The DC fraction is
//! always unsigned.

pub mod decomposition;
pub mod diamond;

pub use decomposition::{decompose, DecompositionResult, Decomposer, StandardDecomposition};
pub use diamond::DiamondPoint;
