// src/simulators/hadamard.rs

use super::{evolve, one_hot_single, GateSimulator, ToggleState};
use crate::catalog::GateKind;
use crate::core::{BasisBit, BlochVector};
use crate::simulation::QuantumStateResult;
use num_complex::Complex;
use std::collections::BTreeMap;

/// Shows how H takes a basis state to an equal superposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HadamardSimulator {
    state: ToggleState,
}

impl HadamardSimulator {
    /// Starts at `|0⟩` with the gate removed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the starting basis state; removes the gate.
    pub fn set_initial_state(&mut self, initial: BasisBit) {
        self.state.set_initial(initial);
    }

    /// The starting basis state.
    pub fn initial_state(&self) -> BasisBit {
        self.state.initial
    }
}

impl GateSimulator for HadamardSimulator {
    fn gate(&self) -> GateKind {
        GateKind::H
    }

    fn is_applied(&self) -> bool {
        self.state.applied
    }

    fn toggle_gate(&mut self) {
        self.state.toggle();
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn derive_state(&self) -> QuantumStateResult {
        let initial = self.state.initial;
        if !self.state.applied {
            return one_hot_single(initial.ket(), initial, initial.bloch_pole());
        }
        let probabilities: BTreeMap<String, f64> = [("0".to_string(), 0.5), ("1".to_string(), 0.5)].into_iter().collect();
        let (label, bloch) = match initial {
            BasisBit::Zero => ("(|0⟩+|1⟩)/√2", BlochVector::new(1.0, 0.0, 0.0)),
            BasisBit::One => ("(|0⟩-|1⟩)/√2", BlochVector::new(-1.0, 0.0, 0.0)),
        };
        QuantumStateResult::new(label, probabilities, false, bloch)
    }

    fn amplitudes(&self) -> Vec<Complex<f64>> {
        let unitary = if self.state.applied { GateKind::H.unitary(0.0) } else { None };
        evolve(self.state.initial, unitary)
    }
}
