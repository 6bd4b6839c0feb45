//! # Error Types — Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Numerical failures carry enough context to identify the offending
//!   quantity (residual, rotation count, component index).
//! - Domain failures carry the element index and the scaled coordinates that
//!   fell outside the Hudson regions.
//! - Batch failures wrap the per-element error with its input index; a batch
//!   never returns a partial result.

use thiserror::Error;

/// Top-level error type for the toolkit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MtsError {
    /// Eigen-decomposition or decomposition arithmetic failed.
    #[error("numeric failure: {0}")]
    Numeric(#[from] NumericError),

    /// A (τ, k) pair could not be mapped to the Hudson plane.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// One element of a batch failed; the whole batch is rejected.
    #[error("event {index}: {source}")]
    Batch {
        /// Position of the failing element in the input batch.
        index: usize,
        /// The element's own failure.
        #[source]
        source: Box<MtsError>,
    },
}

impl MtsError {
    /// Wrap an element failure with its batch position.
    pub fn at_index(index: usize, source: impl Into<MtsError>) -> Self {
        Self::Batch {
            index,
            source: Box::new(source.into()),
        }
    }

    /// Index of the failing batch element, if this is a batch failure.
    pub fn batch_index(&self) -> Option<usize> {
        match self {
            Self::Batch { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Failure in eigen-decomposition or moment arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    /// A tensor component or computed eigenvalue is NaN or infinite.
    #[error("non-finite value in {what}")]
    NonFinite {
        /// Which quantity was non-finite.
        what: &'static str,
    },

    /// The Jacobi iteration hit its rotation budget before the
    /// off-diagonal residual dropped below tolerance.
    #[error("eigen-solver did not converge after {rotations} rotations (residual {residual:e})")]
    NoConvergence {
        /// Number of rotations performed.
        rotations: usize,
        /// Largest remaining off-diagonal magnitude.
        residual: f64,
    },

    /// The tensor is identically zero; no fractional decomposition exists.
    #[error("tensor has zero scalar moment")]
    NullTensor,
}

/// Failure mapping (τ, k) into the Hudson plane.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No region captured the pair (e.g. NaN input).
    #[error("point {index} (scaled tau {scaled_tau}, k {k}) lies outside every Hudson region")]
    Unmapped {
        /// Element index within the call.
        index: usize,
        /// τ·(1 − |k|).
        scaled_tau: f64,
        /// k as supplied.
        k: f64,
    },

    /// A region formula produced a non-finite coordinate.
    #[error("point {index} (scaled tau {scaled_tau}, k {k}) hits a singular Hudson denominator")]
    Singular {
        /// Element index within the call.
        index: usize,
        /// τ·(1 − |k|).
        scaled_tau: f64,
        /// k as supplied.
        k: f64,
    },

    /// τ and k arrays differ in length.
    #[error("tau has {tau} elements but k has {k}")]
    LengthMismatch {
        /// Length of the τ array.
        tau: usize,
        /// Length of the k array.
        k: usize,
    },

    /// Grid lattice spacing must lie in [0.001, 1].
    #[error("invalid grid step {0} (expected 0.001 <= step <= 1)")]
    InvalidStep(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_error_reports_index_and_cause() {
        let err = MtsError::at_index(7, NumericError::NullTensor);
        assert_eq!(err.batch_index(), Some(7));
        assert_eq!(err.to_string(), "event 7: numeric failure: tensor has zero scalar moment");
    }

    #[test]
    fn plain_errors_have_no_batch_index() {
        let err: MtsError = DomainError::LengthMismatch { tau: 3, k: 2 }.into();
        assert_eq!(err.batch_index(), None);
        assert_eq!(err.to_string(), "domain error: tau has 3 elements but k has 2");
    }

    #[test]
    fn no_convergence_display_includes_rotations() {
        let err = NumericError::NoConvergence {
            rotations: 900,
            residual: 1.5e-3,
        };
        let s = err.to_string();
        assert!(s.contains("900 rotations"));
        assert!(s.contains("1.5e-3"));
    }
}
