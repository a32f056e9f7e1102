// src/simulators/cnot.rs

use super::GateSimulator;
use crate::catalog::GateKind;
use crate::core::{basis_strings, BasisBit};
use crate::simulation::QuantumStateResult;
use num_complex::Complex;
use num_traits::Zero;

/// Controlled-NOT on two basis-state qubits.
///
/// Only the classical projection is shown: inputs are basis states, so the
/// output is a single basis string. The Bloch view follows the target qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CnotSimulator {
    control: BasisBit,
    target: BasisBit,
    applied: bool,
}

impl CnotSimulator {
    /// Starts at `|00⟩` with the gate removed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the control qubit. The applied flag is left as is.
    pub fn set_control(&mut self, control: BasisBit) {
        self.control = control;
    }

    /// Sets the target qubit. The applied flag is left as is.
    pub fn set_target(&mut self, target: BasisBit) {
        self.target = target;
    }

    /// The control qubit.
    pub fn control(&self) -> BasisBit {
        self.control
    }

    /// Target after the gate: flipped iff applied and the control is `|1⟩`.
    pub fn effective_target(&self) -> BasisBit {
        self.target.xor(self.applied && self.control == BasisBit::One)
    }

    /// Two-character basis string `control + effective_target`.
    pub fn result_basis_string(&self) -> String {
        format!("{}{}", self.control, self.effective_target())
    }
}

impl GateSimulator for CnotSimulator {
    fn gate(&self) -> GateKind {
        GateKind::CNOT
    }

    fn is_applied(&self) -> bool {
        self.applied
    }

    fn toggle_gate(&mut self) {
        self.applied = !self.applied;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn derive_state(&self) -> QuantumStateResult {
        let basis = self.result_basis_string();
        QuantumStateResult::one_hot(
            format!("|{}⟩", basis),
            &basis_strings(2),
            &basis,
            self.effective_target().bloch_pole(),
        )
    }

    fn amplitudes(&self) -> Vec<Complex<f64>> {
        let mut amps = vec![Complex::zero(); 4];
        amps[self.control.index() * 2 + self.effective_target().index()] = Complex::new(1.0, 0.0);
        amps
    }
}
