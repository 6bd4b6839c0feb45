//! # Source-Type Parameters (T, k)
//!
//! Hudson, Pearce & Rogers (1989) eigenvalue-ratio coordinates:
//!
//! ```text
//! M_iso  = tr(M) / 3
//! m'_i   = M_i − M_iso                    deviatoric eigenvalues
//! m'_max = deviatoric eigenvalue of largest magnitude
//! m'_min = deviatoric eigenvalue of smallest magnitude
//!
//! k = M_iso / (|M_iso| + |m'_max|)        ∈ [−1, 1]
//! T = 2·m'_min / |m'_max|                 ∈ [−1, 1]
//! ```
//!
//! A vanishing deviatoric part (below `DEVIATORIC_EPSILON · ‖M‖_F`) gives
//! T = 0 and k = ±1.
//!
//! Reference locations after mapping: double couple (0, 0), explosion
//! (0, 1), CLVD (2, −1, −1) at (−1, 0), tensile crack (3, 1, 1) at
//! (−4/9, 5/9).

use serde::{Deserialize, Serialize};

use mts_core::{
    DomainError, EigenTriple, MomentTensor, MtsError, NumericError, SymmetricEigenSolver,
    DEVIATORIC_EPSILON,
};

use crate::mapping::{map_point, HudsonPoint};

/// Source-type coordinates of one moment tensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceType {
    /// T: CLVD share of the deviatoric part, signed.
    pub tau: f64,
    /// k: isotropic share of the whole tensor, signed.
    pub k: f64,
}

impl SourceType {
    /// Source type from the isotropic moment and the full tensor's
    /// eigenvalues. `norm` is the tensor's Frobenius norm.
    pub fn from_parts(
        isotropic: f64,
        eigenvalues: &EigenTriple,
        norm: f64,
    ) -> Result<Self, NumericError> {
        if norm == 0.0 {
            return Err(NumericError::NullTensor);
        }

        let deviatoric = EigenTriple::new(eigenvalues.values().map(|e| e - isotropic));
        let [m_min, _, m_max] = deviatoric.by_magnitude();

        let source = if m_max.abs() <= DEVIATORIC_EPSILON * norm {
            Self {
                tau: 0.0,
                k: isotropic.signum(),
            }
        } else {
            Self {
                tau: 2.0 * m_min / m_max.abs(),
                k: isotropic / (isotropic.abs() + m_max.abs()),
            }
        };

        if !(source.tau.is_finite() && source.k.is_finite()) {
            return Err(NumericError::NonFinite {
                what: "source-type parameter",
            });
        }
        Ok(source)
    }

    /// Source type of `tensor`, using `solver` for the eigenvalues.
    ///
    /// T and k are ratios, so they are computed on the normalized tensor.
    pub fn from_tensor<S: SymmetricEigenSolver>(
        tensor: &MomentTensor,
        solver: &S,
    ) -> Result<Self, NumericError> {
        let (unit, _) = tensor.normalized()?;
        let eigenvalues = solver.eigenvalues(&unit)?;
        Self::from_parts(unit.isotropic(), &eigenvalues, unit.frobenius_norm())
    }

    /// Position of this source type on the Hudson plot.
    pub fn to_hudson(&self) -> Result<HudsonPoint, DomainError> {
        map_point(self.tau, self.k)
    }
}

/// Source type and Hudson position of one tensor.
pub fn project<S: SymmetricEigenSolver>(
    tensor: &MomentTensor,
    solver: &S,
) -> Result<(SourceType, HudsonPoint), MtsError> {
    let source = SourceType::from_tensor(tensor, solver)?;
    let point = source.to_hudson()?;
    Ok((source, point))
}

/// Project every tensor in order; the first failure rejects the batch.
pub fn project_batch<S: SymmetricEigenSolver>(
    tensors: &[MomentTensor],
    solver: &S,
) -> Result<Vec<(SourceType, HudsonPoint)>, MtsError> {
    let projected = tensors
        .iter()
        .enumerate()
        .map(|(index, tensor)| project(tensor, solver).map_err(|e| MtsError::at_index(index, e)))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(events = projected.len(), "projected batch onto hudson plane");
    Ok(projected)
}
