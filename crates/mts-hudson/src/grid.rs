//! # Hudson Reference Grid
//!
//! The background lattice of the Hudson plot: lines of constant k swept over
//! T, and lines of constant T swept over k, each pushed through the same
//! mapping used for events.
//!
//! With step `h` and `n = round(1/h)` the lattice is `cᵢ = −1 + i·h` for
//! `i = 0..=2n`. For each of the first `n` lattice values `c` (the negative
//! half) four lines are emitted in this order: k = c, k = −c, T = c, T = −c.
//! The zero lines are not part of the grid; the axes are drawn by the
//! renderer. At |k| = 1 the constant-k line collapses onto a single vertex.

use serde::{Deserialize, Serialize};

use mts_core::DomainError;

use crate::mapping::map;

/// Which source-type coordinate a grid line holds fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "axis", rename_all = "snake_case")]
pub enum GridAxis {
    /// k fixed, T swept across the lattice.
    ConstantK {
        /// The fixed k value.
        k: f64,
    },
    /// T fixed, k swept across the lattice.
    ConstantTau {
        /// The fixed T value.
        tau: f64,
    },
}

/// One mapped grid polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// The fixed coordinate of this line.
    #[serde(flatten)]
    pub axis: GridAxis,
    /// Horizontal coordinates, in sweep order.
    pub u: Vec<f64>,
    /// Vertical coordinates, in sweep order.
    pub v: Vec<f64>,
}

/// The full reference grid for one lattice step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudsonGrid {
    step: f64,
    lines: Vec<GridLine>,
}

impl HudsonGrid {
    /// Lattice spacing of the standard grid.
    pub const DEFAULT_STEP: f64 = 0.1;

    /// Finest accepted lattice spacing: 4000 lines of 2001 points.
    pub const MIN_STEP: f64 = 1e-3;

    /// The standard 0.1-step grid.
    pub fn standard() -> Result<Self, DomainError> {
        Self::with_step(Self::DEFAULT_STEP)
    }

    /// Build the grid for lattice spacing `step` (`MIN_STEP` ≤ step ≤ 1).
    pub fn with_step(step: f64) -> Result<Self, DomainError> {
        let lattice = Self::lattice(step)?;
        let half = lattice.len() / 2;

        let mut lines = Vec::with_capacity(4 * half);
        for &c in &lattice[..half] {
            for k in [c, -c] {
                let fixed = vec![k; lattice.len()];
                let (u, v) = map(&lattice, &fixed)?;
                lines.push(GridLine {
                    axis: GridAxis::ConstantK { k },
                    u,
                    v,
                });
            }
            for tau in [c, -c] {
                let fixed = vec![tau; lattice.len()];
                let (u, v) = map(&fixed, &lattice)?;
                lines.push(GridLine {
                    axis: GridAxis::ConstantTau { tau },
                    u,
                    v,
                });
            }
        }

        tracing::debug!(step, lines = lines.len(), "built hudson reference grid");
        Ok(Self { step, lines })
    }

    /// Lattice values `−1 + i·step` for `i = 0..=2·round(1/step)`.
    pub fn lattice(step: f64) -> Result<Vec<f64>, DomainError> {
        if !(step.is_finite() && (Self::MIN_STEP..=1.0).contains(&step)) {
            return Err(DomainError::InvalidStep(step));
        }
        let n = (1.0 / step).round() as usize;
        let last = n.checked_mul(2).ok_or(DomainError::InvalidStep(step))?;
        Ok((0..=last).map(|i| -1.0 + i as f64 * step).collect())
    }

    /// Lattice spacing.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Mapped grid lines in emission order.
    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }
}
