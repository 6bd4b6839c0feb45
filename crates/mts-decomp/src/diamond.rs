//! # Diamond Plot Coordinates
//!
//! Places a decomposed event on the ISO/CLVD diamond: CLVD on the horizontal
//! axis, ISO on the vertical axis, with the DC fraction carried alongside as
//! the depth value the renderer shades by. Because `|clvd| + |iso| + dc = 1`
//! every point lies inside the unit diamond `|x| + |y| ≤ 1`.

use serde::{Deserialize, Serialize};

use crate::decomposition::DecompositionResult;

/// Scatter position of one event on the diamond plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiamondPoint {
    /// Signed CLVD fraction.
    pub x: f64,
    /// Signed isotropic fraction.
    pub y: f64,
    /// Unsigned double-couple fraction.
    pub dc: f64,
}

impl DiamondPoint {
    /// True when the point lies inside the unit diamond, within `tol`.
    pub fn is_inside(&self, tol: f64) -> bool {
        self.x.abs() + self.y.abs() <= 1.0 + tol
    }
}

impl From<DecompositionResult> for DiamondPoint {
    fn from(r: DecompositionResult) -> Self {
        Self {
            x: r.clvd,
            y: r.iso,
            dc: r.dc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::decompose;
    use mts_core::MomentTensor;

    #[test]
    fn axes_are_clvd_and_iso() {
        let p = DecompositionResult {
            dc: 0.2,
            clvd: -0.3,
            iso: 0.5,
        }
        .diamond_point();
        assert_eq!(p, DiamondPoint { x: -0.3, y: 0.5, dc: 0.2 });
    }

    #[test]
    fn explosion_sits_on_top_vertex() {
        let p = decompose(&MomentTensor::diagonal(1.0, 1.0, 1.0))
            .unwrap()
            .diamond_point();
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
        assert!(p.is_inside(1e-12));
    }

    #[test]
    fn decomposed_events_stay_inside() {
        let tensors = [
            MomentTensor::from_six([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            MomentTensor::from_upper_triangle([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            MomentTensor::from_six([-0.7, 0.2, 0.1, 0.9, -0.4, 0.3]),
        ];
        for t in &tensors {
            assert!(decompose(t).unwrap().diamond_point().is_inside(1e-12));
        }
    }

    #[test]
    fn outside_point_detected() {
        let p = DiamondPoint { x: 0.8, y: 0.5, dc: 0.0 };
        assert!(!p.is_inside(1e-12));
    }
}
