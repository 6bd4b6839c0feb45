//! # mts-core — Foundational Types for the Source-Type Toolkit
//!
//! This crate is the leaf of the workspace DAG. It defines the moment tensor
//! representation, the symmetric eigen-solver used by every derived
//! quantity, and the error hierarchy shared by the decomposition and Hudson
//! crates.
//!
//! ## Key Design Principles
//!
//! 1. **Symmetric by construction.** `MomentTensor` is built from six
//!    independent components and stores only the upper triangle. There is no
//!    way to build an asymmetric tensor.
//!
//! 2. **Solver order is observable.** `EigenTriple` keeps the eigenvalues in
//!    the order the solver produced them. Callers that need a sorted view ask
//!    for one explicitly; sign rules that depend on solver order see the raw
//!    order.
//!
//! 3. **No silent defaults.** Non-finite input, non-convergence and
//!    degenerate tensors are all reported as `NumericError`. Nothing in the
//!    core substitutes zero or NaN for a failed computation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mts-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod eigen;
pub mod error;
pub mod tensor;

pub use eigen::{EigenTriple, JacobiSolver, SymmetricEigenSolver};
pub use error::{DomainError, MtsError, NumericError};
pub use tensor::{ComponentLayout, MomentTensor};

/// Relative threshold below which a deviatoric part is treated as zero.
///
/// Compared against the largest deviatoric eigenvalue magnitude divided by
/// the tensor's Frobenius norm.
pub const DEVIATORIC_EPSILON: f64 = 1e-9;
