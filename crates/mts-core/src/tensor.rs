//! # Moment Tensor
//!
//! A symmetric 3×3 real matrix built from six independent components.
//!
//! ## Component Layouts
//!
//! Two six-component orderings are in use for event catalogues:
//!
//! | Layout | Order |
//! |--------|-------|
//! | `DiagonalFirst` | m11, m22, m33, m12, m13, m23 |
//! | `UpperTriangle` | m11, m12, m13, m22, m23, m33 |
//!
//! Both land in the same internal representation. Only the upper triangle is
//! stored, so the tensor is symmetric by construction and no validation of
//! physical plausibility is performed.
//!
//! ## Scale
//!
//! Components may be any finite reals. Quantities that square components
//! (the Frobenius norm) overflow past about 1e154 and underflow below about
//! 1e-162, so numerical code works on [`MomentTensor::normalized`], which
//! divides by the largest component magnitude first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumericError;

/// Ordering of the six independent components in an input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentLayout {
    /// Diagonal entries first: m11, m22, m33, m12, m13, m23.
    #[default]
    DiagonalFirst,
    /// Row-major upper triangle: m11, m12, m13, m22, m23, m33.
    UpperTriangle,
}

impl ComponentLayout {
    /// Returns the layout identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DiagonalFirst => "diagonal-first",
            Self::UpperTriangle => "upper-triangle",
        }
    }
}

impl fmt::Display for ComponentLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diagonal-first" => Ok(Self::DiagonalFirst),
            "upper-triangle" => Ok(Self::UpperTriangle),
            other => Err(format!(
                "unknown component layout '{other}' (expected diagonal-first or upper-triangle)"
            )),
        }
    }
}

/// Symmetric seismic moment tensor.
///
/// Stored as the six upper-triangle components in diagonal-first order.
/// Indices passed to [`MomentTensor::get`] are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentTensor {
    m11: f64,
    m22: f64,
    m33: f64,
    m12: f64,
    m13: f64,
    m23: f64,
}

impl MomentTensor {
    /// Build from `[m11, m22, m33, m12, m13, m23]`.
    pub fn from_six(m: [f64; 6]) -> Self {
        Self {
            m11: m[0],
            m22: m[1],
            m33: m[2],
            m12: m[3],
            m13: m[4],
            m23: m[5],
        }
    }

    /// Build from the row-major upper triangle `[m11, m12, m13, m22, m23, m33]`.
    pub fn from_upper_triangle(m: [f64; 6]) -> Self {
        Self {
            m11: m[0],
            m12: m[1],
            m13: m[2],
            m22: m[3],
            m23: m[4],
            m33: m[5],
        }
    }

    /// Build from six components in the given layout.
    pub fn from_layout(m: [f64; 6], layout: ComponentLayout) -> Self {
        match layout {
            ComponentLayout::DiagonalFirst => Self::from_six(m),
            ComponentLayout::UpperTriangle => Self::from_upper_triangle(m),
        }
    }

    /// Diagonal tensor `diag(a, b, c)`.
    pub fn diagonal(a: f64, b: f64, c: f64) -> Self {
        Self::from_six([a, b, c, 0.0, 0.0, 0.0])
    }

    /// The six components in diagonal-first order.
    pub fn components(&self) -> [f64; 6] {
        [self.m11, self.m22, self.m33, self.m12, self.m13, self.m23]
    }

    /// Element at zero-based `(row, col)`, or `None` if either index is 3
    /// or more.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.to_matrix().get(row)?.get(col).copied()
    }

    /// Full 3×3 matrix, rows then columns.
    pub fn to_matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.m11, self.m12, self.m13],
            [self.m12, self.m22, self.m23],
            [self.m13, self.m23, self.m33],
        ]
    }

    /// Trace m11 + m22 + m33.
    pub fn trace(&self) -> f64 {
        self.m11 + self.m22 + self.m33
    }

    /// Isotropic moment, trace / 3.
    pub fn isotropic(&self) -> f64 {
        self.trace() / 3.0
    }

    /// Deviatoric part: the tensor minus `I · trace / 3`.
    pub fn deviatoric(&self) -> Self {
        let iso = self.isotropic();
        Self {
            m11: self.m11 - iso,
            m22: self.m22 - iso,
            m33: self.m33 - iso,
            ..*self
        }
    }

    /// Frobenius norm, counting both off-diagonal triangles.
    pub fn frobenius_norm(&self) -> f64 {
        let diag = self.m11 * self.m11 + self.m22 * self.m22 + self.m33 * self.m33;
        let off = self.m12 * self.m12 + self.m13 * self.m13 + self.m23 * self.m23;
        (diag + 2.0 * off).sqrt()
    }

    /// The tensor with every component negated.
    pub fn negated(&self) -> Self {
        Self::from_six(self.components().map(|c| -c))
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }

    /// Largest component magnitude, `max |M_ij|`.
    pub fn max_abs(&self) -> f64 {
        self.components().iter().fold(0.0, |m, c| m.max(c.abs()))
    }

    /// The tensor divided by its largest component magnitude, together with
    /// that magnitude.
    ///
    /// Every component of the result lies in [−1, 1] and at least one has
    /// magnitude 1. Ratios of moments are unchanged by the division.
    pub fn normalized(&self) -> Result<(Self, f64), NumericError> {
        if !self.is_finite() {
            return Err(NumericError::NonFinite {
                what: "tensor component",
            });
        }
        let scale = self.max_abs();
        if scale == 0.0 {
            return Err(NumericError::NullTensor);
        }
        Ok((Self::from_six(self.components().map(|c| c / scale)), scale))
    }
}

impl From<[f64; 6]> for MomentTensor {
    fn from(m: [f64; 6]) -> Self {
        Self::from_six(m)
    }
}
