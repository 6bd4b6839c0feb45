//! # Symmetric Eigen-Solver
//!
//! Eigenvalues of a [`MomentTensor`] by the classical Jacobi method with
//! largest-off-diagonal pivoting.
//!
//! ## Ordering
//!
//! The solver does not sort. Eigenvalues come back in diagonal order after
//! the final rotation, which for an already diagonal tensor is the input
//! diagonal order. Downstream sign rules read this order directly, so it is
//! part of the solver's observable behavior.
//!
//! ## Scaling
//!
//! Iteration runs on [`MomentTensor::normalized`], so the convergence
//! threshold `tolerance × ‖M̂‖_F` is computed on components in [−1, 1] and
//! cannot overflow or underflow. Eigenvalues are multiplied back by the
//! scale at the end.
//!
//! ## Failure
//!
//! Non-finite input is rejected before iteration. If the off-diagonal
//! residual is still above `tolerance × ‖M̂‖_F` after `max_rotations`
//! rotations the solve fails with [`NumericError::NoConvergence`]. An
//! eigenvalue that overflows when rescaled is [`NumericError::NonFinite`].

use serde::{Deserialize, Serialize};

use crate::error::NumericError;
use crate::tensor::MomentTensor;

/// Eigenvalues of a symmetric tensor.
///
/// Implementations must be deterministic: identical input yields identical
/// output, including order.
pub trait SymmetricEigenSolver {
    /// Compute the three eigenvalues of `tensor`, in solver order.
    fn eigenvalues(&self, tensor: &MomentTensor) -> Result<EigenTriple, NumericError>;
}

impl<S: SymmetricEigenSolver + ?Sized> SymmetricEigenSolver for &S {
    fn eigenvalues(&self, tensor: &MomentTensor) -> Result<EigenTriple, NumericError> {
        (**self).eigenvalues(tensor)
    }
}

/// The three real eigenvalues of a moment tensor, in solver order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EigenTriple([f64; 3]);

impl EigenTriple {
    /// Wrap three eigenvalues in the order given.
    pub fn new(values: [f64; 3]) -> Self {
        Self(values)
    }

    /// Eigenvalues in solver order.
    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    /// Sum of the eigenvalues (equals the tensor trace).
    pub fn trace(&self) -> f64 {
        self.0[0] + self.0[1] + self.0[2]
    }

    /// Eigenvalues sorted largest first.
    pub fn sorted_descending(&self) -> [f64; 3] {
        let mut v = self.0;
        v.sort_by(|a, b| b.total_cmp(a));
        v
    }

    /// Eigenvalues ordered by ascending magnitude.
    ///
    /// Equal magnitudes keep solver order.
    pub fn by_magnitude(&self) -> [f64; 3] {
        let mut v = self.0;
        v.sort_by(|a, b| a.abs().total_cmp(&b.abs()));
        v
    }

    /// `M1 + M3 − 2·M2` over solver order.
    ///
    /// Positive selects the positive CLVD branch; zero and negative select
    /// the negative branch.
    pub fn clvd_sign_indicator(&self) -> f64 {
        let [m1, m2, m3] = self.0;
        m1 + m3 - 2.0 * m2
    }
}

/// Classical Jacobi eigenvalue iteration for 3×3 symmetric tensors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JacobiSolver {
    /// Convergence threshold relative to the tensor's Frobenius norm.
    pub tolerance: f64,
    /// Rotation budget before the solve is declared non-convergent.
    pub max_rotations: usize,
}

impl JacobiSolver {
    /// Default relative tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-12;
    /// Default rotation budget, 100·n² for n = 3.
    pub const DEFAULT_MAX_ROTATIONS: usize = 900;

    /// Create a solver with explicit tolerance and rotation budget.
    pub fn new(tolerance: f64, max_rotations: usize) -> Self {
        Self {
            tolerance,
            max_rotations,
        }
    }
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE, Self::DEFAULT_MAX_ROTATIONS)
    }
}

impl SymmetricEigenSolver for JacobiSolver {
    fn eigenvalues(&self, tensor: &MomentTensor) -> Result<EigenTriple, NumericError> {
        if !tensor.is_finite() {
            return Err(NumericError::NonFinite {
                what: "tensor component",
            });
        }
        if tensor.max_abs() == 0.0 {
            return Ok(EigenTriple([0.0; 3]));
        }

        let (unit, scale) = tensor.normalized()?;
        let mut a = unit.to_matrix();
        let threshold = self.tolerance * unit.frobenius_norm();
        let mut rotations = 0;

        loop {
            let (p, q, max_off) = largest_off_diagonal(&a);
            if max_off <= threshold {
                break;
            }
            if rotations == self.max_rotations {
                tracing::warn!(
                    rotations,
                    residual = max_off,
                    "jacobi iteration exhausted its rotation budget"
                );
                return Err(NumericError::NoConvergence {
                    rotations,
                    residual: max_off,
                });
            }
            rotate(&mut a, p, q);
            rotations += 1;
        }

        let values = [a[0][0] * scale, a[1][1] * scale, a[2][2] * scale];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(NumericError::NonFinite { what: "eigenvalue" });
        }
        tracing::trace!(rotations, ?values, "jacobi converged");
        Ok(EigenTriple(values))
    }
}

/// Position and magnitude of the largest upper off-diagonal element.
fn largest_off_diagonal(a: &[[f64; 3]; 3]) -> (usize, usize, f64) {
    let mut best = (0, 1, a[0][1].abs());
    for (p, q) in [(0, 2), (1, 2)] {
        let val = a[p][q].abs();
        if val > best.2 {
            best = (p, q, val);
        }
    }
    best
}

/// Apply the Givens rotation that zeroes `a[p][q]`: A' = Gᵀ A G.
fn rotate(a: &mut [[f64; 3]; 3], p: usize, q: usize) {
    let app = a[p][p];
    let aqq = a[q][q];
    let apq = a[p][q];

    let theta = 0.5 * (2.0 * apq).atan2(app - aqq);
    let (s, c) = theta.sin_cos();

    // Rows p and q.
    for i in 0..3 {
        let rp = c * a[p][i] + s * a[q][i];
        let rq = -s * a[p][i] + c * a[q][i];
        a[p][i] = rp;
        a[q][i] = rq;
    }
    // Columns p and q.
    for row in a.iter_mut() {
        let cp = c * row[p] + s * row[q];
        let cq = -s * row[p] + c * row[q];
        row[p] = cp;
        row[q] = cq;
    }
    // Exact zero and exact symmetry for the pivot pair.
    a[p][q] = 0.0;
    a[q][p] = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(t: &EigenTriple) -> [f64; 3] {
        t.sorted_descending()
    }

    #[test]
    fn diagonal_tensor_keeps_input_order() {
        let t = MomentTensor::diagonal(1.0, -4.0, 2.0);
        let eig = JacobiSolver::default().eigenvalues(&t).unwrap();
        assert_eq!(eig.values(), [1.0, -4.0, 2.0]);
    }

    #[test]
    fn zero_tensor_has_zero_eigenvalues() {
        let t = MomentTensor::from_six([0.0; 6]);
        let eig = JacobiSolver::default().eigenvalues(&t).unwrap();
        assert_eq!(eig.values(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn known_3x3_eigenvalues() {
        // [[2, 1, 0], [1, 2, 1], [0, 1, 2]] has eigenvalues 2 + √2, 2, 2 − √2.
        let t = MomentTensor::from_six([2.0, 2.0, 2.0, 1.0, 0.0, 1.0]);
        let eig = JacobiSolver::default().eigenvalues(&t).unwrap();
        let s = sorted(&eig);
        let r2 = 2f64.sqrt();
        assert!((s[0] - (2.0 + r2)).abs() < 1e-12);
        assert!((s[1] - 2.0).abs() < 1e-12);
        assert!((s[2] - (2.0 - r2)).abs() < 1e-12);
    }

    #[test]
    fn off_diagonal_double_couple() {
        // Pure shear on the 1-2 plane: eigenvalues 1, 0, -1.
        let t = MomentTensor::from_six([0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        let eig = JacobiSolver::default().eigenvalues(&t).unwrap();
        let s = sorted(&eig);
        assert!((s[0] - 1.0).abs() < 1e-12);
        assert!(s[1].abs() < 1e-12);
        assert!((s[2] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn trace_is_preserved() {
        let t = MomentTensor::from_six([0.3, -1.2, 0.7, 0.45, -0.9, 0.15]);
        let eig = JacobiSolver::default().eigenvalues(&t).unwrap();
        assert!((eig.trace() - t.trace()).abs() < 1e-12);
    }

    #[test]
    fn nan_component_is_rejected() {
        let t = MomentTensor::from_six([1.0, 0.0, 0.0, f64::NAN, 0.0, 0.0]);
        let err = JacobiSolver::default().eigenvalues(&t).unwrap_err();
        assert_eq!(
            err,
            NumericError::NonFinite {
                what: "tensor component"
            }
        );
    }

    #[test]
    fn exhausted_budget_reports_no_convergence() {
        let t = MomentTensor::from_six([1.0, 2.0, 3.0, 0.5, 0.5, 0.5]);
        let solver = JacobiSolver::new(0.0, 1);
        match solver.eigenvalues(&t) {
            Err(NumericError::NoConvergence { rotations, residual }) => {
                assert_eq!(rotations, 1);
                assert!(residual > 0.0);
            }
            other => panic!("expected NoConvergence, got {other:?}"),
        }
    }

    #[test]
    fn by_magnitude_orders_by_absolute_value() {
        let eig = EigenTriple::new([-3.0, 0.5, 2.0]);
        assert_eq!(eig.by_magnitude(), [0.5, 2.0, -3.0]);
        assert_eq!(eig.sorted_descending(), [2.0, 0.5, -3.0]);
    }

    #[test]
    fn clvd_indicator_uses_solver_order() {
        assert_eq!(EigenTriple::new([1.0, 0.0, -1.0]).clvd_sign_indicator(), 0.0);
        assert_eq!(EigenTriple::new([2.0, -1.0, -1.0]).clvd_sign_indicator(), 3.0);
        assert_eq!(EigenTriple::new([-1.0, 2.0, -1.0]).clvd_sign_indicator(), -6.0);
    }

    #[test]
    fn solver_is_usable_by_reference() {
        fn solve<S: SymmetricEigenSolver>(s: S) -> EigenTriple {
            s.eigenvalues(&MomentTensor::diagonal(1.0, 2.0, 4.0)).unwrap()
        }
        let solver = JacobiSolver::default();
        assert_eq!(solve(&solver).values(), [1.0, 2.0, 4.0]);
    }

    fn assert_golden_ratio_spectrum(scale: f64) {
        // [[1, 1, 0], [1, 0, 0], [0, 0, 0]] · scale has eigenvalues
        // φ·scale, 0 and (1 − φ)·scale.
        let t = MomentTensor::from_six([scale, 0.0, 0.0, scale, 0.0, 0.0]);
        let s = sorted(&JacobiSolver::default().eigenvalues(&t).unwrap());
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        assert!((s[0] / scale - phi).abs() < 1e-12, "{s:?} at scale {scale:e}");
        assert!((s[1] / scale).abs() < 1e-12, "{s:?} at scale {scale:e}");
        assert!((s[2] / scale - (1.0 - phi)).abs() < 1e-12, "{s:?} at scale {scale:e}");
    }

    #[test]
    fn huge_components_are_rotated() {
        assert_golden_ratio_spectrum(1e200);
        assert_golden_ratio_spectrum(1e300);
    }

    #[test]
    fn tiny_components_are_rotated() {
        assert_golden_ratio_spectrum(1e-200);
        assert_golden_ratio_spectrum(1e-300);
    }

    #[test]
    fn tiny_double_couple_is_not_null() {
        let t = MomentTensor::from_six([0.0, 0.0, 0.0, 1e-200, 0.0, 0.0]);
        let s = sorted(&JacobiSolver::default().eigenvalues(&t).unwrap());
        assert!((s[0] / 1e-200 - 1.0).abs() < 1e-12);
        assert!((s[2] / 1e-200 + 1.0).abs() < 1e-12);
    }

    #[test]
    fn overflowing_eigenvalue_is_rejected() {
        // All-MAX matrix: largest eigenvalue 3·MAX.
        let t = MomentTensor::from_six([f64::MAX; 6]);
        let err = JacobiSolver::default().eigenvalues(&t).unwrap_err();
        assert_eq!(err, NumericError::NonFinite { what: "eigenvalue" });
    }
}
