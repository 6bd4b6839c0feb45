//! # (τ, k) → (u, v) Mapping
//!
//! Every element is classified independently against all five region
//! conditions, in table order. Where two conditions overlap (only the origin,
//! claimed by both Q1 region B and Q3 region A) the later region wins; all
//! formulas agree there.
//!
//! Inside τ ∈ [−2, 2], k ∈ [−1, 1] every denominator stays at or above ⅓,
//! so a finite in-range pair always maps to a finite point.

use serde::{Deserialize, Serialize};

use mts_core::DomainError;

/// The five disjoint regions of the Hudson mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HudsonRegion {
    /// Second and fourth quadrants: identity map.
    OffDiagonal,
    /// First quadrant above the s = 4k line.
    Quadrant1A,
    /// First quadrant on or below the s = 4k line.
    Quadrant1B,
    /// Third quadrant on or above the s = 4k line.
    Quadrant3A,
    /// Third quadrant below the s = 4k line.
    Quadrant3B,
}

impl HudsonRegion {
    /// Region of the scaled pair `(s, k)`, or `None` if no condition holds.
    pub fn classify(scaled_tau: f64, k: f64) -> Option<Self> {
        let s = scaled_tau;
        let mut region = None;
        if (s > 0.0 && k < 0.0) || (s < 0.0 && k > 0.0) {
            region = Some(Self::OffDiagonal);
        }
        if s < 4.0 * k && s >= 0.0 && k >= 0.0 {
            region = Some(Self::Quadrant1A);
        }
        if s >= 4.0 * k && s >= 0.0 && k >= 0.0 {
            region = Some(Self::Quadrant1B);
        }
        if s >= 4.0 * k && s <= 0.0 && k <= 0.0 {
            region = Some(Self::Quadrant3A);
        }
        if s < 4.0 * k && s <= 0.0 && k <= 0.0 {
            region = Some(Self::Quadrant3B);
        }
        region
    }

    /// Apply this region's formula to the scaled pair `(s, k)`.
    pub fn apply(self, scaled_tau: f64, k: f64) -> (f64, f64) {
        let s = scaled_tau;
        match self {
            Self::OffDiagonal => (s, k),
            Self::Quadrant1A => {
                let d = 1.0 - s / 2.0;
                (s / d, k / d)
            }
            Self::Quadrant1B => {
                let d = 1.0 - 2.0 * k;
                (s / d, k / d)
            }
            Self::Quadrant3A => {
                let d = 1.0 + s / 2.0;
                (s / d, k / d)
            }
            Self::Quadrant3B => {
                let d = 1.0 + 2.0 * k;
                (s / d, k / d)
            }
        }
    }
}

/// A point in the Hudson plotting plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudsonPoint {
    /// Horizontal coordinate.
    pub u: f64,
    /// Vertical coordinate.
    pub v: f64,
}

/// `τ · (1 − |k|)`.
pub fn scaled_tau(tau: f64, k: f64) -> f64 {
    tau * (1.0 - k.abs())
}

fn map_element(index: usize, tau: f64, k: f64) -> Result<HudsonPoint, DomainError> {
    let s = scaled_tau(tau, k);
    let region = HudsonRegion::classify(s, k).ok_or(DomainError::Unmapped {
        index,
        scaled_tau: s,
        k,
    })?;
    let (u, v) = region.apply(s, k);
    if !(u.is_finite() && v.is_finite()) {
        return Err(DomainError::Singular {
            index,
            scaled_tau: s,
            k,
        });
    }
    Ok(HudsonPoint { u, v })
}

/// Map a single (τ, k) pair.
pub fn map_point(tau: f64, k: f64) -> Result<HudsonPoint, DomainError> {
    map_element(0, tau, k)
}

/// Map equal-length τ and k arrays elementwise.
///
/// Fails as a whole on the first unmappable element; no partial output.
pub fn map(tau: &[f64], k: &[f64]) -> Result<(Vec<f64>, Vec<f64>), DomainError> {
    if tau.len() != k.len() {
        return Err(DomainError::LengthMismatch {
            tau: tau.len(),
            k: k.len(),
        });
    }

    let mut u = Vec::with_capacity(tau.len());
    let mut v = Vec::with_capacity(tau.len());
    for (index, (&t, &kk)) in tau.iter().zip(k).enumerate() {
        let p = map_element(index, t, kk)?;
        u.push(p.u);
        v.push(p.v);
    }
    tracing::trace!(points = u.len(), "mapped hudson points");
    Ok((u, v))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-domain pair is captured and maps to a finite point.
        #[test]
        fn never_undefined_in_domain(tau in -2.0..=2.0f64, k in -1.0..=1.0f64) {
            let p = map_point(tau, k);
            prop_assert!(p.is_ok(), "({}, {}) failed: {:?}", tau, k, p.err());
            let p = p.unwrap();
            prop_assert!(p.u.is_finite() && p.v.is_finite());
        }

        /// At most one region's strict interior claims a pair.
        #[test]
        fn regions_disjoint_off_origin(tau in -2.0..=2.0f64, k in -1.0..=1.0f64) {
            let s = scaled_tau(tau, k);
            prop_assume!(s != 0.0 || k != 0.0);
            let off = (s > 0.0 && k < 0.0) || (s < 0.0 && k > 0.0);
            let q1a = s < 4.0 * k && s >= 0.0 && k >= 0.0;
            let q1b = s >= 4.0 * k && s >= 0.0 && k >= 0.0;
            let q3a = s >= 4.0 * k && s <= 0.0 && k <= 0.0;
            let q3b = s < 4.0 * k && s <= 0.0 && k <= 0.0;
            let hits = [off, q1a, q1b, q3a, q3b].iter().filter(|&&b| b).count();
            prop_assert_eq!(hits, 1);
        }

        /// The sign of each coordinate follows the sign of its input.
        #[test]
        fn signs_preserved(tau in -2.0..=2.0f64, k in -1.0..=1.0f64) {
            let s = scaled_tau(tau, k);
            let p = map_point(tau, k).unwrap();
            prop_assert!(p.u * s >= 0.0);
            prop_assert!(p.v * k >= 0.0);
        }

        /// Mapping is point-symmetric: (−τ, −k) ↦ (−u, −v).
        #[test]
        fn point_symmetric(tau in -2.0..=2.0f64, k in -1.0..=1.0f64) {
            let a = map_point(tau, k).unwrap();
            let b = map_point(-tau, -k).unwrap();
            prop_assert!((a.u + b.u).abs() < 1e-12);
            prop_assert!((a.v + b.v).abs() < 1e-12);
        }

        /// Batch output equals per-point output with no cross-talk.
        #[test]
        fn batch_matches_single(
            pairs in prop::collection::vec((-2.0..=2.0f64, -1.0..=1.0f64), 0..32)
        ) {
            let tau: Vec<f64> = pairs.iter().map(|p| p.0).collect();
            let k: Vec<f64> = pairs.iter().map(|p| p.1).collect();
            let (u, v) = map(&tau, &k).unwrap();
            for (i, (t, kk)) in pairs.iter().enumerate() {
                let p = map_point(*t, *kk).unwrap();
                prop_assert_eq!(u[i], p.u);
                prop_assert_eq!(v[i], p.v);
            }
        }
    }
}
