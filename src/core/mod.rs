// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod state;

// Re-export public types for convenient access via `qlogic::core::TypeName`
pub use error::{QlogicError, QubitIndex};
pub use state::{basis_strings, ground_basis_string, BasisBit, BlochVector};

pub mod constants;
pub use constants::qlogic_constants::{
    DEFAULT_GATE_PARAMETER, DEFAULT_TOLERANCE, DISPLAY_FRAC_1_SQRT_2, MAX_QUBITS, MIN_QUBITS,
};
