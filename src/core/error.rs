//! Error handling logic

use std::fmt;
use thiserror::Error;

/// Index of a qubit wire within a circuit.
/// Wire 0 is the top wire and the most significant character of a basis string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitIndex(pub usize);

impl fmt::Display for QubitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Errors raised while building circuits, placing gates or validating results.
///
/// State derivation itself is total and never fails; these errors surface
/// integration mistakes (unknown gate ids, bad indices) that would otherwise
/// be masked.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QlogicError {
    /// The gate identifier is not part of the catalog.
    #[error("Unsupported gate: '{gate_id}'")]
    UnsupportedGate {
        /// The identifier that failed to resolve.
        gate_id: String,
    },

    /// A gate references a qubit outside of the circuit.
    #[error("Qubit {qubit} is out of range for a {qubit_count}-qubit circuit")]
    QubitOutOfRange {
        /// The offending index.
        qubit: QubitIndex,
        /// Number of qubits in the circuit.
        qubit_count: usize,
    },

    /// Circuits hold between one and three qubits.
    #[error("Qubit count must be between {min} and {max}, got {got}")]
    InvalidQubitCount {
        /// Requested qubit count.
        got: usize,
        /// Smallest supported count.
        min: usize,
        /// Largest supported count.
        max: usize,
    },

    /// A multi-qubit gate uses the same wire twice.
    #[error("Gate {gate_id} uses qubit {qubit} more than once")]
    DuplicateQubit {
        /// Catalog id of the gate.
        gate_id: &'static str,
        /// The repeated wire.
        qubit: QubitIndex,
    },

    /// The gate kind does not fit the requested gate shape.
    #[error("Gate {gate_id} acts on {expected} qubit(s) but was given {got}")]
    ArityMismatch {
        /// Catalog id of the gate.
        gate_id: &'static str,
        /// Arity from the catalog.
        expected: usize,
        /// Number of wires supplied.
        got: usize,
    },

    /// No placed gate carries the given instance id.
    #[error("No gate with instance id {0} in circuit")]
    GateNotFound(u64),

    /// Basis bits are written as '0' or '1'.
    #[error("Invalid basis bit '{0}', expected '0' or '1'")]
    InvalidBasisBit(char),

    /// Simulator configuration could not be parsed or is inconsistent.
    #[error("Invalid simulator configuration: {message}")]
    InvalidConfig {
        /// Parser or validation message.
        message: String,
    },

    /// A result or configuration could not be converted to or from JSON.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// A derived result violates normalization or Bloch-ball containment.
    #[error("Incoherent state: {message}")]
    Incoherence {
        /// Description of the violated invariant.
        message: String,
    },
}
