// src/simulation/mod.rs

//! Derives the displayed quantum state of a `qlogic::circuits::Circuit`.
//!
//! The engine is a fixed decision table over which gate kinds a circuit
//! contains, not a state-vector simulator: H together with CNOT shows the Bell
//! pair, H alone an equal superposition, and X, Y, Z their single-qubit
//! results, in that priority. Gate order is ignored and every derivation
//! recomputes the result from scratch.

mod config;
pub(crate) mod engine;
mod results;

pub use config::{SimulatorConfig, ValidationMode};
pub use results::QuantumStateResult;

use crate::circuits::Circuit;
use crate::core::QlogicError;
use crate::validation;

/// Derives the state of `circuit`.
///
/// Total and deterministic: the same circuit always yields the same result,
/// and no input makes it fail.
pub fn simulate(circuit: &Circuit) -> QuantumStateResult {
    engine::derive(circuit)
}

/// Runs circuits and optionally validates what comes out.
#[derive(Debug, Default, Clone)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings (strict validation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: SimulatorConfig) -> Result<Self, QlogicError> {
        config.check()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Derives the state of `circuit`.
    ///
    /// # Returns
    /// * `Ok(QuantumStateResult)` with the derived state.
    /// * `Err(QlogicError::Incoherence)` if validation is enabled and the result
    ///   is not normalized or leaves the Bloch ball.
    pub fn run(&self, circuit: &Circuit) -> Result<QuantumStateResult, QlogicError> {
        let result = simulate(circuit);
        if self.config.validation == ValidationMode::Strict {
            validation::validate_result(&result, Some(self.config.tolerance))?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GateKind;
    use crate::circuits::CircuitBuilder;
    use crate::core::BlochVector;

    #[test]
    fn run_matches_simulate() -> Result<(), QlogicError> {
        let circuit = CircuitBuilder::new(2).place(GateKind::H, 0).build()?;
        let simulator = Simulator::new();
        assert_eq!(simulator.run(&circuit)?, simulate(&circuit));
        Ok(())
    }

    #[test]
    fn run_without_validation() -> Result<(), QlogicError> {
        let config = SimulatorConfig { validation: ValidationMode::Off, ..SimulatorConfig::default() };
        let simulator = Simulator::with_config(config)?;
        let circuit = CircuitBuilder::new(1).place(GateKind::X, 0).build()?;
        let result = simulator.run(&circuit)?;
        assert_eq!(result.bloch_vector(), BlochVector::SOUTH);
        Ok(())
    }

    #[test]
    fn with_config_rejects_nan_tolerance() {
        let config = SimulatorConfig { tolerance: f64::NAN, ..SimulatorConfig::default() };
        assert!(matches!(Simulator::with_config(config), Err(QlogicError::InvalidConfig { .. })));
    }
}
