// src/simulators/phase.rs

use super::{evolve, one_hot_single, GateSimulator, ToggleState};
use crate::catalog::GateKind;
use crate::core::{BasisBit, BlochVector, DISPLAY_FRAC_1_SQRT_2};
use crate::simulation::QuantumStateResult;
use num_complex::Complex;

/// Which phase gate the simulator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseVariant {
    /// Phase of π/2 on `|1⟩`.
    #[default]
    S,
    /// Phase of π/4 on `|1⟩`.
    T,
}

impl PhaseVariant {
    /// The catalog gate for this variant.
    pub fn kind(self) -> GateKind {
        match self {
            PhaseVariant::S => GateKind::S,
            PhaseVariant::T => GateKind::T,
        }
    }
}

/// S and T gates acting on a basis state.
///
/// Phase gates only rotate the phase of the `|1⟩` amplitude, so measurement
/// probabilities always stay one-hot on the starting state. Starting from
/// `|0⟩` the gate has no visible effect at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseGateSimulator {
    state: ToggleState,
    variant: PhaseVariant,
}

impl PhaseGateSimulator {
    /// Starts at `|0⟩` with the S gate selected and removed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the starting basis state; removes the gate.
    pub fn set_initial_state(&mut self, initial: BasisBit) {
        self.state.set_initial(initial);
    }

    /// Switches between S and T. The applied flag is left as is.
    pub fn select_variant(&mut self, variant: PhaseVariant) {
        self.variant = variant;
    }

    /// The selected gate.
    pub fn variant(&self) -> PhaseVariant {
        self.variant
    }

    /// The starting basis state.
    pub fn initial_state(&self) -> BasisBit {
        self.state.initial
    }
}

impl GateSimulator for PhaseGateSimulator {
    fn gate(&self) -> GateKind {
        self.variant.kind()
    }

    fn is_applied(&self) -> bool {
        self.state.applied
    }

    fn toggle_gate(&mut self) {
        self.state.toggle();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.variant = PhaseVariant::S;
    }

    fn derive_state(&self) -> QuantumStateResult {
        let initial = self.state.initial;
        let (label, bloch) = match (initial, self.state.applied, self.variant) {
            (BasisBit::Zero, _, _) => ("|0⟩", BlochVector::NORTH),
            (BasisBit::One, false, _) => ("|1⟩", BlochVector::SOUTH),
            (BasisBit::One, true, PhaseVariant::S) => ("i|1⟩", BlochVector::new(0.0, -1.0, 0.0)),
            (BasisBit::One, true, PhaseVariant::T) => (
                "e^(iπ/4)|1⟩",
                BlochVector::new(-DISPLAY_FRAC_1_SQRT_2, -DISPLAY_FRAC_1_SQRT_2, 0.0),
            ),
        };
        one_hot_single(label, initial, bloch)
    }

    fn amplitudes(&self) -> Vec<Complex<f64>> {
        let unitary = if self.state.applied { self.variant.kind().unitary(0.0) } else { None };
        evolve(self.state.initial, unitary)
    }
}
