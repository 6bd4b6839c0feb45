//! # Standard Decomposition & Sign Disambiguation
//!
//! ## Standard Decomposition
//!
//! Follows Jost & Herrmann (1989):
//!
//! ```text
//! M_iso   = tr(M) / 3
//! M_dev   = M − I·M_iso,  eigenvalues |e1| ≤ |e2| ≤ |e3|
//! F       = −e1 / e3                      (|F| ≤ ½)
//! M_dc    = |e3| · (1 − 2|F|)
//! M_clvd  = 2|e3| · |F|
//! M0      = |M_iso| + |e3|
//! ```
//!
//! The three fractions `M_dc/M0`, `M_clvd/M0`, `|M_iso|/M0` are unsigned and
//! sum to one. A deviatoric part with `|e3| ≤ DEVIATORIC_EPSILON · ‖M‖_F` is
//! treated as zero so that rounding noise in a purely isotropic tensor is not
//! reported as shear.
//!
//! The fractions are invariant under positive scaling, so [`Decomposer`]
//! computes them on the normalized tensor (largest component magnitude 1).
//! The norm, the trace and the zero-deviatoric test then stay finite and
//! non-zero for any finite input.
//!
//! ## External Signs
//!
//! [`Decomposer::decompose`] then signs the CLVD fraction from the full
//! tensor's eigenvalues in solver order, and the ISO fraction from the trace.
//! Both rules use strict `> 0`; an exact zero takes the negative branch.

use serde::{Deserialize, Serialize};

use mts_core::{
    EigenTriple, JacobiSolver, MomentTensor, MtsError, NumericError, SymmetricEigenSolver,
    DEVIATORIC_EPSILON,
};

use crate::diamond::DiamondPoint;

// ---------------------------------------------------------------------------
// StandardDecomposition
// ---------------------------------------------------------------------------

/// Unsigned moments and fractions of the standard decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardDecomposition {
    /// |tr(M)/3|.
    pub moment_iso: f64,
    /// Double-couple moment.
    pub moment_dc: f64,
    /// CLVD moment.
    pub moment_clvd: f64,
    /// Deviatoric moment, `moment_dc + moment_clvd`.
    pub moment_devi: f64,
    /// Total scalar moment, `moment_iso + moment_devi`.
    pub moment: f64,
    /// Unit of the moments above. [`Decomposer::standard_decomposition`]
    /// sets it to the input's largest component magnitude; `from_parts`
    /// works in the caller's units and sets 1.
    pub scale: f64,
}

impl StandardDecomposition {
    /// Decompose from the isotropic moment and the deviatoric eigenvalues.
    ///
    /// `norm` is the Frobenius norm of the full tensor and scales the
    /// zero-deviatoric threshold. A zero total moment is a
    /// [`NumericError::NullTensor`].
    pub fn from_parts(
        isotropic: f64,
        deviatoric: &EigenTriple,
        norm: f64,
    ) -> Result<Self, NumericError> {
        if norm == 0.0 {
            return Err(NumericError::NullTensor);
        }

        let [e1, _, e3] = deviatoric.by_magnitude();
        let (moment_dc, moment_clvd) = if e3.abs() <= DEVIATORIC_EPSILON * norm {
            (0.0, 0.0)
        } else {
            let f = (-e1 / e3).clamp(-0.5, 0.5).abs();
            (e3.abs() * (1.0 - 2.0 * f), 2.0 * e3.abs() * f)
        };

        let moment_iso = isotropic.abs();
        let moment_devi = moment_dc + moment_clvd;
        let moment = moment_iso + moment_devi;
        if !moment.is_finite() {
            return Err(NumericError::NonFinite {
                what: "scalar moment",
            });
        }
        if moment == 0.0 {
            return Err(NumericError::NullTensor);
        }

        Ok(Self {
            moment_iso,
            moment_dc,
            moment_clvd,
            moment_devi,
            moment,
            scale: 1.0,
        })
    }

    /// Isotropic fraction, `moment_iso / moment`.
    pub fn ratio_iso(&self) -> f64 {
        self.moment_iso / self.moment
    }

    /// Double-couple fraction, `moment_dc / moment`.
    pub fn ratio_dc(&self) -> f64 {
        self.moment_dc / self.moment
    }

    /// CLVD fraction, `moment_clvd / moment`.
    pub fn ratio_clvd(&self) -> f64 {
        self.moment_clvd / self.moment
    }
}

// ---------------------------------------------------------------------------
// DecompositionResult
// ---------------------------------------------------------------------------

/// Signed (DC, CLVD, ISO) fractions of one moment tensor.
///
/// `dc` is unsigned; `clvd` and `iso` carry the external sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Double-couple fraction in [0, 1].
    pub dc: f64,
    /// Signed CLVD fraction in [−1, 1].
    pub clvd: f64,
    /// Signed isotropic fraction in [−1, 1].
    pub iso: f64,
}

impl DecompositionResult {
    /// `(dc, clvd, iso)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.dc, self.clvd, self.iso)
    }

    /// Position of this event on the diamond plot.
    pub fn diamond_point(&self) -> DiamondPoint {
        DiamondPoint::from(*self)
    }
}

// ---------------------------------------------------------------------------
// Decomposer
// ---------------------------------------------------------------------------

/// Decomposes moment tensors with a pluggable eigen-solver.
#[derive(Debug, Clone, Default)]
pub struct Decomposer<S = JacobiSolver> {
    solver: S,
}

impl Decomposer {
    /// Decomposer backed by the default Jacobi solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SymmetricEigenSolver> Decomposer<S> {
    /// Decomposer backed by `solver`.
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }

    /// The eigen-solver in use.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Unsigned standard decomposition of `tensor`, with moments in units
    /// of its largest component magnitude.
    pub fn standard_decomposition(
        &self,
        tensor: &MomentTensor,
    ) -> Result<StandardDecomposition, NumericError> {
        let (unit, scale) = tensor.normalized()?;
        let deviatoric = self.solver.eigenvalues(&unit.deviatoric())?;
        let standard =
            StandardDecomposition::from_parts(unit.isotropic(), &deviatoric, unit.frobenius_norm())?;
        Ok(StandardDecomposition { scale, ..standard })
    }

    /// Signed (DC, CLVD, ISO) fractions of `tensor`.
    pub fn decompose(&self, tensor: &MomentTensor) -> Result<DecompositionResult, NumericError> {
        let (unit, _) = tensor.normalized()?;
        let eigenvalues = self.solver.eigenvalues(&unit)?;
        let standard = self.standard_decomposition(&unit)?;

        let sign_clvd = if eigenvalues.clvd_sign_indicator() > 0.0 {
            1.0
        } else {
            -1.0
        };
        let sign_iso = if unit.trace() > 0.0 { 1.0 } else { -1.0 };

        Ok(DecompositionResult {
            dc: standard.ratio_dc(),
            clvd: standard.ratio_clvd() * sign_clvd,
            iso: standard.ratio_iso() * sign_iso,
        })
    }

    /// Decompose every tensor in order.
    ///
    /// The first failing tensor rejects the whole batch with its index.
    pub fn decompose_batch(
        &self,
        tensors: &[MomentTensor],
    ) -> Result<Vec<DecompositionResult>, MtsError> {
        let results = tensors
            .iter()
            .enumerate()
            .map(|(index, tensor)| {
                self.decompose(tensor)
                    .map_err(|e| MtsError::at_index(index, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(events = results.len(), "decomposed batch");
        Ok(results)
    }
}

/// Decompose with the default Jacobi solver.
pub fn decompose(tensor: &MomentTensor) -> Result<DecompositionResult, NumericError> {
    Decomposer::new().decompose(tensor)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tensor() -> impl Strategy<Value = MomentTensor> {
        prop::array::uniform6(-1.0..1.0f64)
            .prop_filter("non-null", |m| m.iter().any(|c| c.abs() > 1e-6))
            .prop_map(MomentTensor::from_six)
    }

    proptest! {
        /// Every fraction lies in [0, 1] in magnitude, and they sum to one.
        #[test]
        fn fractions_bounded(t in tensor()) {
            let r = decompose(&t).unwrap();
            for v in [r.dc, r.clvd, r.iso] {
                prop_assert!(v.abs() <= 1.0 + 1e-12, "fraction {} out of range", v);
            }
            prop_assert!(r.dc >= 0.0);
            let sum = r.dc + r.clvd.abs() + r.iso.abs();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        /// A positive indicator over solver order gives a non-negative CLVD.
        #[test]
        fn clvd_sign_follows_solver_order(t in tensor()) {
            let eig = JacobiSolver::default().eigenvalues(&t).unwrap();
            let r = decompose(&t).unwrap();
            if eig.clvd_sign_indicator() > 0.0 {
                prop_assert!(r.clvd >= 0.0);
            } else {
                prop_assert!(r.clvd <= 0.0);
            }
        }

        /// Negating the tensor flips ISO and leaves DC unchanged.
        #[test]
        fn global_sign_flip(t in tensor()) {
            prop_assume!(t.trace().abs() > 1e-6);
            let a = decompose(&t).unwrap();
            let b = decompose(&t.negated()).unwrap();
            prop_assert!((a.dc - b.dc).abs() < 1e-9);
            prop_assert!((a.iso + b.iso).abs() < 1e-9);
            prop_assert_eq!(a.iso.signum(), -b.iso.signum());
        }

        /// Scaling by a power of two leaves the result bit-for-bit
        /// unchanged, including where ‖M‖² overflows or underflows.
        #[test]
        fn power_of_two_scale_invariant(t in tensor(), e in -800i32..=1000) {
            let c = 2f64.powi(e);
            let scaled = MomentTensor::from_six(t.components().map(|x| x * c));
            prop_assert_eq!(decompose(&scaled).unwrap(), decompose(&t).unwrap());
        }

        /// Any scale factor from 1e-150 to 1e150 leaves the fractions
        /// unchanged; a negative factor flips ISO and keeps DC.
        #[test]
        fn scale_invariant(
            t in tensor(),
            exponent in -150.0..150.0f64,
            negative in any::<bool>(),
        ) {
            let c = if negative { -(10f64.powf(exponent)) } else { 10f64.powf(exponent) };
            let a = decompose(&t).unwrap();
            let b = decompose(&MomentTensor::from_six(t.components().map(|x| x * c))).unwrap();
            prop_assert!((a.dc - b.dc).abs() < 1e-9, "{:?} vs {:?}", a, b);
            prop_assert!((a.clvd.abs() - b.clvd.abs()).abs() < 1e-9, "{:?} vs {:?}", a, b);
            if negative {
                prop_assert!((a.iso + b.iso).abs() < 1e-9, "{:?} vs {:?}", a, b);
            } else {
                prop_assert!((a.iso - b.iso).abs() < 1e-9, "{:?} vs {:?}", a, b);
            }
        }

        /// Batch output equals per-tensor output element by element.
        #[test]
        fn batch_matches_single(ts in prop::collection::vec(tensor(), 0..16)) {
            let batch = Decomposer::new().decompose_batch(&ts).unwrap();
            prop_assert_eq!(batch.len(), ts.len());
            for (t, r) in ts.iter().zip(&batch) {
                prop_assert_eq!(*r, decompose(t).unwrap());
            }
        }
    }
}
