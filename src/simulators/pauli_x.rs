// src/simulators/pauli_x.rs

use super::{evolve, one_hot_single, GateSimulator, ToggleState};
use crate::catalog::GateKind;
use crate::core::BasisBit;
use crate::simulation::QuantumStateResult;
use num_complex::Complex;

/// The quantum NOT gate: the final state is `initial XOR applied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PauliXSimulator {
    state: ToggleState,
}

impl PauliXSimulator {
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

    /// The basis state after the (possibly applied) bit flip.
    pub fn final_state(&self) -> BasisBit {
        self.state.initial.xor(self.state.applied)
    }
}

impl GateSimulator for PauliXSimulator {
    fn gate(&self) -> GateKind {
        GateKind::X
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
        let bit = self.final_state();
        one_hot_single(bit.ket(), bit, bit.bloch_pole())
    }

    fn amplitudes(&self) -> Vec<Complex<f64>> {
        let unitary = if self.state.applied { GateKind::X.unitary(0.0) } else { None };
        evolve(self.state.initial, unitary)
    }
}
