// src/simulators/mod.rs

//! Interactive single-gate simulators.
//!
//! Each simulator is a small `Copy` record: a starting basis state, an
//! "applied" flag and, for the phase simulator, the selected gate. The UI owns
//! the record, mutates it through the methods below and calls
//! [`GateSimulator::derive_state`] after every change. Inputs are always basis
//! states, so every derivation is a fixed table lookup.

mod cnot;
mod hadamard;
mod pauli_x;
mod phase;

pub use cnot::CnotSimulator;
pub use hadamard::HadamardSimulator;
pub use pauli_x::PauliXSimulator;
pub use phase::{PhaseGateSimulator, PhaseVariant};

use crate::catalog::{GateKind, Unitary2};
use crate::core::{BasisBit, BlochVector};
use crate::simulation::QuantumStateResult;
use num_complex::Complex;
use num_traits::Zero;

/// Behavior shared by every toggle simulator.
pub trait GateSimulator {
    /// The gate this simulator demonstrates.
    fn gate(&self) -> GateKind;

    /// Whether the gate is currently applied.
    fn is_applied(&self) -> bool;

    /// Flips the applied flag. Toggling twice restores the previous result.
    fn toggle_gate(&mut self);

    /// Returns to `|0⟩` (or `|00⟩`) with the gate removed.
    fn reset(&mut self);

    /// Derives the displayed state from the current inputs.
    fn derive_state(&self) -> QuantumStateResult;

    /// State amplitudes in basis-string order, computed from the gate's matrix.
    ///
    /// Their squared magnitudes equal the probabilities of `derive_state`.
    fn amplitudes(&self) -> Vec<Complex<f64>>;

    /// Matrix text shown next to the simulator.
    fn gate_matrix_label(&self) -> &'static str {
        self.gate().matrix_label()
    }
}

/// Inputs of a one-qubit toggle simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ToggleState {
    pub(crate) initial: BasisBit,
    pub(crate) applied: bool,
}

impl ToggleState {
    /// Picks a new starting state and removes the gate.
    pub(crate) fn set_initial(&mut self, initial: BasisBit) {
        self.initial = initial;
        self.applied = false;
    }

    pub(crate) fn toggle(&mut self) {
        self.applied = !self.applied;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `|initial⟩`, or `U|initial⟩` when `unitary` is given.
pub(crate) fn evolve(initial: BasisBit, unitary: Option<Unitary2>) -> Vec<Complex<f64>> {
    match unitary {
        Some(u) => vec![u[0][initial.index()], u[1][initial.index()]],
        None => {
            let mut amps = vec![Complex::zero(); 2];
            amps[initial.index()] = Complex::new(1.0, 0.0);
            amps
        }
    }
}

/// Probabilities for a deterministic one-qubit state.
pub(crate) fn one_hot_single(label: impl Into<String>, bit: BasisBit, bloch: BlochVector) -> QuantumStateResult {
    QuantumStateResult::one_hot(label, &["0", "1"], &bit.as_char().to_string(), bloch)
}
