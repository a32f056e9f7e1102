// src/simulation/engine.rs
use crate::catalog::GateKind;
use crate::circuits::Circuit;
use crate::core::{basis_strings, ground_basis_string, BlochVector};
use crate::simulation::QuantumStateResult;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Which of the recognized gate kinds appear anywhere in a circuit.
///
/// Only presence matters; order and multiplicity are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct GatePresence {
    pub(crate) hadamard: bool,
    pub(crate) cnot: bool,
    pub(crate) pauli_x: bool,
    pub(crate) pauli_y: bool,
    pub(crate) pauli_z: bool,
}

impl GatePresence {
    /// Scans a circuit. Gates outside H, CNOT, X, Y, Z contribute nothing.
    pub(crate) fn scan(circuit: &Circuit) -> Self {
        let mut presence = Self::default();
        for placed in circuit.gates() {
            match placed.kind() {
                GateKind::H => presence.hadamard = true,
                GateKind::CNOT => presence.cnot = true,
                GateKind::X => presence.pauli_x = true,
                GateKind::Y => presence.pauli_y = true,
                GateKind::Z => presence.pauli_z = true,
                other => trace!(gate = %other, id = %placed.id, "gate has no effect on the derived state"),
            }
        }
        presence
    }
}

/// The closed decision table of the multi-gate engine, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// H and CNOT: the Bell pair (|00⟩+|11⟩)/√2.
    BellPair,
    /// H alone: equal superposition.
    Superposition,
    /// X: |1⟩.
    BitFlip,
    /// Y: i|1⟩ drawn on the +Y axis.
    BitPhaseFlip,
    /// Z: |0⟩ with a phase that is invisible on |0⟩.
    PhaseFlip,
    /// Nothing recognized: the ground state.
    Ground,
}

impl Rule {
    /// Picks the first rule whose condition holds.
    pub(crate) fn select(presence: &GatePresence) -> Self {
        match presence {
            GatePresence { hadamard: true, cnot: true, .. } => Rule::BellPair,
            GatePresence { hadamard: true, .. } => Rule::Superposition,
            GatePresence { pauli_x: true, .. } => Rule::BitFlip,
            GatePresence { pauli_y: true, .. } => Rule::BitPhaseFlip,
            GatePresence { pauli_z: true, .. } => Rule::PhaseFlip,
            _ => Rule::Ground,
        }
    }

    /// Renders the rule for a circuit of `qubit_count` wires.
    pub(crate) fn derive(self, qubit_count: usize) -> QuantumStateResult {
        let single = basis_strings(1);
        match self {
            Rule::BellPair => {
                let probabilities = basis_strings(2)
                    .into_iter()
                    .map(|b| {
                        let p = if b == "00" || b == "11" { 0.5 } else { 0.0 };
                        (b, p)
                    })
                    .collect();
                QuantumStateResult::new("(|00⟩+|11⟩)/√2", probabilities, true, BlochVector::ORIGIN)
            }
            Rule::Superposition => {
                let plus_x = BlochVector::new(1.0, 0.0, 0.0);
                if qubit_count == 1 {
                    QuantumStateResult::new("(|0⟩+|1⟩)/√2", uniform(&single), false, plus_x)
                } else {
                    QuantumStateResult::new("Equal superposition", uniform(&basis_strings(qubit_count)), false, plus_x)
                }
            }
            Rule::BitFlip => QuantumStateResult::one_hot("|1⟩", &single, "1", BlochVector::SOUTH),
            Rule::BitPhaseFlip => {
                QuantumStateResult::new("i|1⟩", uniform(&single), false, BlochVector::new(0.0, 1.0, 0.0))
            }
            Rule::PhaseFlip => QuantumStateResult::one_hot("|0⟩", &single, "0", BlochVector::NORTH),
            Rule::Ground => ground_state(qubit_count),
        }
    }
}

/// `|0…0⟩` over all `2^qubit_count` basis strings.
pub(crate) fn ground_state(qubit_count: usize) -> QuantumStateResult {
    let ground = ground_basis_string(qubit_count);
    QuantumStateResult::one_hot(format!("|{}⟩", ground), &basis_strings(qubit_count), &ground, BlochVector::NORTH)
}

fn uniform(keys: &[String]) -> BTreeMap<String, f64> {
    let p = 1.0 / keys.len() as f64;
    keys.iter().map(|k| (k.clone(), p)).collect()
}

/// Derives the displayed state of a circuit.
///
/// Total over every circuit: an empty circuit yields the ground state, and
/// otherwise the highest-priority matching [`Rule`] decides the result.
pub(crate) fn derive(circuit: &Circuit) -> QuantumStateResult {
    let qubit_count = circuit.qubit_count();
    if circuit.is_empty() {
        debug!(qubit_count, "empty circuit, ground state");
        return ground_state(qubit_count);
    }
    let presence = GatePresence::scan(circuit);
    let rule = Rule::select(&presence);
    debug!(?rule, ?presence, qubit_count, gates = circuit.len(), "selected rule");
    rule.derive(qubit_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presence(hadamard: bool, cnot: bool, pauli_x: bool, pauli_y: bool, pauli_z: bool) -> GatePresence {
        GatePresence { hadamard, cnot, pauli_x, pauli_y, pauli_z }
    }

    #[test]
    fn rule_priority_follows_table_order() {
        assert_eq!(Rule::select(&presence(true, true, true, true, true)), Rule::BellPair);
        assert_eq!(Rule::select(&presence(true, false, true, true, true)), Rule::Superposition);
        assert_eq!(Rule::select(&presence(false, true, true, true, true)), Rule::BitFlip);
        assert_eq!(Rule::select(&presence(false, true, false, true, true)), Rule::BitPhaseFlip);
        assert_eq!(Rule::select(&presence(false, false, false, false, true)), Rule::PhaseFlip);
        assert_eq!(Rule::select(&presence(false, true, false, false, false)), Rule::Ground);
        assert_eq!(Rule::select(&GatePresence::default()), Rule::Ground);
    }

    #[test]
    fn superposition_splits_evenly_over_all_strings() {
        let result = Rule::Superposition.derive(3);
        assert_eq!(result.probabilities().len(), 8);
        assert!(result.probabilities().values().all(|p| *p == 0.125));
        assert_eq!(result.state_label(), "Equal superposition");
    }

    #[test]
    fn ground_label_has_one_zero_per_wire() {
        assert_eq!(ground_state(3).state_label(), "|000⟩");
        assert_eq!(ground_state(1).probability("0"), 1.0);
    }
}
