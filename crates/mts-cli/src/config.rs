//! # Configuration
//!
//! Optional YAML configuration loaded with `--config`. Every field has a
//! default, so an empty file (or no file) yields the standard settings.
//! Command-line flags override whatever the file sets.
//!
//! ```yaml
//! solver:
//!   tolerance: 1.0e-12
//!   max_rotations: 900
//! grid:
//!   step: 0.1
//! input:
//!   layout: upper-triangle
//! output:
//!   format: json
//!   pretty: true
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use mts_core::{ComponentLayout, JacobiSolver};
use mts_hudson::HudsonGrid;

use crate::output::OutputFormat;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MtsConfig {
    /// Eigen-solver settings.
    pub solver: SolverConfig,
    /// Reference grid settings.
    pub grid: GridConfig,
    /// Input parsing settings.
    pub input: InputConfig,
    /// Output rendering settings.
    pub output: OutputConfig,
}

/// Jacobi solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Convergence threshold relative to the tensor norm.
    pub tolerance: f64,
    /// Rotation budget.
    pub max_rotations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: JacobiSolver::DEFAULT_TOLERANCE,
            max_rotations: JacobiSolver::DEFAULT_MAX_ROTATIONS,
        }
    }
}

impl SolverConfig {
    /// The solver these settings describe.
    pub fn solver(&self) -> JacobiSolver {
        JacobiSolver::new(self.tolerance, self.max_rotations)
    }
}

/// Reference grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Lattice spacing.
    pub step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step: HudsonGrid::DEFAULT_STEP,
        }
    }
}

/// Input parsing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Six-component ordering of event records.
    pub layout: ComponentLayout,
}

/// Output rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Serialization format.
    pub format: OutputFormat,
    /// Pretty-print JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl MtsConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration YAML. Empty input yields defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings no computation can use.
    pub fn validate(&self) -> Result<()> {
        let tol = self.solver.tolerance;
        if !(tol.is_finite() && tol > 0.0) {
            bail!("solver.tolerance must be a positive finite number, got {tol}");
        }
        if self.solver.max_rotations == 0 {
            bail!("solver.max_rotations must be at least 1");
        }
        let step = self.grid.step;
        if !(step.is_finite() && (HudsonGrid::MIN_STEP..=1.0).contains(&step)) {
            bail!(
                "grid.step must lie in [{}, 1], got {step}",
                HudsonGrid::MIN_STEP
            );
        }
        Ok(())
    }
}
