// src/simulation/config.rs

//! Simulator configuration.

use crate::core::{QlogicError, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Whether `Simulator::run` checks derived results before returning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Return results as derived.
    Off,
    /// Check normalization and Bloch-ball containment on every run.
    #[default]
    Strict,
}

/// Options for a [`Simulator`](super::Simulator).
///
/// Can be built in code or loaded from JSON, e.g.
/// `{"validation": "off", "tolerance": 1e-6}`. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Validation applied to each result.
    pub validation: ValidationMode,
    /// Tolerance for normalization and Bloch-ball checks.
    pub tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { validation: ValidationMode::Strict, tolerance: DEFAULT_TOLERANCE }
    }
}

impl SimulatorConfig {
    /// Parses and checks a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, QlogicError> {
        let config: SimulatorConfig =
            serde_json::from_str(json).map_err(|e| QlogicError::InvalidConfig { message: e.to_string() })?;
        config.check()?;
        Ok(config)
    }

    /// Rejects negative or non-finite tolerances.
    pub fn check(&self) -> Result<(), QlogicError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(QlogicError::InvalidConfig {
                message: format!("tolerance must be a non-negative finite number, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}
