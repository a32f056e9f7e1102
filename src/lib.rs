// src/lib.rs

//! `qlogic` - State derivation for an educational quantum gate visualizer
//!
//! This library turns placed gates (or toggled gate flags) into the three
//! views a visualizer draws: a ket label, measurement probabilities per basis
//! string and a Bloch-sphere direction. It is deliberately a lookup over a
//! small set of recognized gate combinations, not a general simulator.

pub mod core;
pub mod catalog;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod simulators;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{BasisBit, BlochVector, QlogicError, QubitIndex};
pub use crate::catalog::{GateCategory, GateDescriptor, GateKind, GATE_CATALOG};
pub use crate::operations::{Gate, GateInstanceId, PlacedGate};
pub use crate::circuits::{Circuit, CircuitBuilder};
pub use crate::simulation::{simulate, QuantumStateResult, Simulator, SimulatorConfig, ValidationMode};
pub use crate::simulators::{
    CnotSimulator, GateSimulator, HadamardSimulator, PauliXSimulator, PhaseGateSimulator, PhaseVariant,
};
pub use crate::validation::{check_amplitude_consistency, check_bloch_containment, check_normalization, validate_result};

// Example 1: Bell pair from the circuit builder
// Placing H and then CNOT on two wires shows the entangled Bell state.
/// ```
/// use qlogic::{CircuitBuilder, GateKind, Simulator, QlogicError};
///
/// fn main() -> Result<(), QlogicError> {
///     let circuit = CircuitBuilder::new(2)
///         .place(GateKind::H, 0)
///         .place(GateKind::CNOT, 0) // control q0, target q1
///         .build()?;
///
///     let result = Simulator::new().run(&circuit)?;
///     println!("Circuit:\n{}", circuit);
///     println!("{}", result);
///
///     assert_eq!(result.state_label(), "(|00⟩+|11⟩)/√2");
///     assert_eq!(result.probability("00"), 0.5);
///     assert_eq!(result.probability("11"), 0.5);
///     assert_eq!(result.entanglement_flag(), 1);
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Toggling the T gate
// Phase gates move the Bloch vector without changing probabilities.
/// ```
/// use qlogic::{BasisBit, GateSimulator, PhaseGateSimulator, PhaseVariant};
///
/// let mut sim = PhaseGateSimulator::new();
/// sim.select_variant(PhaseVariant::T);
/// sim.set_initial_state(BasisBit::One);
/// sim.toggle_gate();
///
/// let result = sim.derive_state();
/// assert_eq!(result.state_label(), "e^(iπ/4)|1⟩");
/// assert_eq!(result.probability("1"), 1.0);
/// assert_eq!(result.bloch_vector().x, -0.707);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
