// src/catalog/mod.rs

//! The static gate catalog.
//!
//! Every gate the visualizer knows about is described here once: its
//! identifier, display symbol, arity, category and whether it carries an
//! angle parameter. The circuit model and the engine only read the arity,
//! the parameter flag and identifier equality; colors and layout live in the
//! presentation layer.

use crate::core::QlogicError;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

/// A 2x2 complex matrix acting on one qubit.
pub type Unitary2 = [[Complex<f64>; 2]; 2];

/// Grouping shown as tabs in the gate palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateCategory {
    /// Hadamard and identity.
    Basic,
    /// X, Y, Z.
    Pauli,
    /// S, T and the arbitrary phase gate.
    Phase,
    /// Axis rotations.
    Rotation,
    /// Two-qubit gates.
    Multi,
    /// Toffoli and controlled-U.
    Advanced,
}

/// Every gate kind known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GateKind {
    /// Hadamard.
    H,
    /// Identity.
    I,
    /// Pauli-X (NOT).
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// √Z phase gate.
    S,
    /// √S phase gate.
    T,
    /// Arbitrary phase gate.
    P,
    /// Rotation around X.
    RX,
    /// Rotation around Y.
    RY,
    /// Rotation around Z.
    RZ,
    /// Controlled-NOT.
    CNOT,
    /// Controlled-Z.
    CZ,
    /// Swap.
    SWAP,
    /// Toffoli.
    CCNOT,
    /// Controlled-U with a phase parameter.
    CU,
}

/// Immutable description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateDescriptor {
    /// Gate kind this entry describes.
    pub kind: GateKind,
    /// Unique identifier, e.g. `"CNOT"`.
    pub id: &'static str,
    /// Symbol drawn on the gate tile.
    pub symbol: &'static str,
    /// Number of qubits the gate acts on (1, 2 or 3).
    pub qubit_arity: usize,
    /// Palette category.
    pub category: GateCategory,
    /// True when the gate takes an angle in radians.
    pub has_parameter: bool,
    /// One-line description shown as a tooltip.
    pub description: &'static str,
}

const fn entry(
    kind: GateKind,
    id: &'static str,
    symbol: &'static str,
    qubit_arity: usize,
    category: GateCategory,
    has_parameter: bool,
    description: &'static str,
) -> GateDescriptor {
    GateDescriptor { kind, id, symbol, qubit_arity, category, has_parameter, description }
}

/// The full catalog in palette order.
pub static GATE_CATALOG: [GateDescriptor; 16] = [
    entry(GateKind::H, "H", "H", 1, GateCategory::Basic, false, "Hadamard - Creates superposition"),
    entry(GateKind::I, "I", "I", 1, GateCategory::Basic, false, "Identity - No operation"),
    entry(GateKind::X, "X", "X", 1, GateCategory::Pauli, false, "Pauli-X - Bit flip (NOT)"),
    entry(GateKind::Y, "Y", "Y", 1, GateCategory::Pauli, false, "Pauli-Y - Bit and phase flip"),
    entry(GateKind::Z, "Z", "Z", 1, GateCategory::Pauli, false, "Pauli-Z - Phase flip"),
    entry(GateKind::S, "S", "S", 1, GateCategory::Phase, false, "S Gate - √Z phase gate"),
    entry(GateKind::T, "T", "T", 1, GateCategory::Phase, false, "T Gate - √S phase gate"),
    entry(GateKind::P, "P", "P", 1, GateCategory::Phase, true, "Phase Gate - Arbitrary phase"),
    entry(GateKind::RX, "RX", "Rx", 1, GateCategory::Rotation, true, "Rotation around X-axis"),
    entry(GateKind::RY, "RY", "Ry", 1, GateCategory::Rotation, true, "Rotation around Y-axis"),
    entry(GateKind::RZ, "RZ", "Rz", 1, GateCategory::Rotation, true, "Rotation around Z-axis"),
    entry(GateKind::CNOT, "CNOT", "⊕", 2, GateCategory::Multi, false, "Controlled-NOT"),
    entry(GateKind::CZ, "CZ", "CZ", 2, GateCategory::Multi, false, "Controlled-Z"),
    entry(GateKind::SWAP, "SWAP", "⤫", 2, GateCategory::Multi, false, "Swap two qubits"),
    entry(GateKind::CCNOT, "CCNOT", "⊕⊕", 3, GateCategory::Advanced, false, "Toffoli - Controlled-CNOT"),
    entry(GateKind::CU, "CU", "CU", 2, GateCategory::Advanced, true, "Controlled-U gate"),
];

/// Looks up a descriptor by its identifier.
pub fn lookup(id: &str) -> Option<&'static GateDescriptor> {
    GATE_CATALOG.iter().find(|d| d.id == id)
}

/// All descriptors in a category, in palette order.
pub fn gates_in_category(category: GateCategory) -> impl Iterator<Item = &'static GateDescriptor> {
    GATE_CATALOG.iter().filter(move |d| d.category == category)
}

/// Descriptors of gates that fit on a circuit of `max_qubits` wires.
pub fn available_gates(max_qubits: usize) -> impl Iterator<Item = &'static GateDescriptor> {
    GATE_CATALOG.iter().filter(move |d| d.qubit_arity <= max_qubits)
}

impl GateKind {
    /// The catalog entry for this kind.
    pub fn descriptor(self) -> &'static GateDescriptor {
        // GATE_CATALOG lists the variants in declaration order.
        &GATE_CATALOG[self as usize]
    }

    /// Catalog identifier.
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    /// Number of wires the gate occupies.
    pub fn qubit_arity(self) -> usize {
        self.descriptor().qubit_arity
    }

    /// Whether placed instances carry an angle.
    pub fn has_parameter(self) -> bool {
        self.descriptor().has_parameter
    }

    /// The single-qubit unitary of this gate, or of the operation a controlled
    /// gate applies to its target. `theta` is ignored by fixed gates.
    ///
    /// Returns `None` for SWAP, which has no single-qubit target operation.
    pub fn unitary(self, theta: f64) -> Option<Unitary2> {
        let zero = Complex::<f64>::zero();
        let one = Complex::<f64>::one();
        let i = Complex::new(0.0, 1.0);
        let h = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
        let m = match self {
            GateKind::H => [[h, h], [h, -h]],
            GateKind::I => [[one, zero], [zero, one]],
            GateKind::X | GateKind::CNOT | GateKind::CCNOT => [[zero, one], [one, zero]],
            GateKind::Y => [[zero, -i], [i, zero]],
            GateKind::Z | GateKind::CZ => [[one, zero], [zero, -one]],
            GateKind::S => [[one, zero], [zero, i]],
            GateKind::T => [[one, zero], [zero, Complex::from_polar(1.0, std::f64::consts::FRAC_PI_4)]],
            GateKind::P | GateKind::CU => [[one, zero], [zero, Complex::from_polar(1.0, theta)]],
            GateKind::RX => [
                [Complex::new(c, 0.0), Complex::new(0.0, -s)],
                [Complex::new(0.0, -s), Complex::new(c, 0.0)],
            ],
            GateKind::RY => [
                [Complex::new(c, 0.0), Complex::new(-s, 0.0)],
                [Complex::new(s, 0.0), Complex::new(c, 0.0)],
            ],
            GateKind::RZ => [
                [Complex::from_polar(1.0, -theta / 2.0), zero],
                [zero, Complex::from_polar(1.0, theta / 2.0)],
            ],
            GateKind::SWAP => return None,
        };
        Some(m)
    }

    /// Matrix text shown next to a simulator, e.g. `X = [[0, 1], [1, 0]]`.
    pub fn matrix_label(self) -> &'static str {
        match self {
            GateKind::H => "H = (1/√2) [[1, 1], [1, -1]]",
            GateKind::I => "I = [[1, 0], [0, 1]]",
            GateKind::X => "X = [[0, 1], [1, 0]]",
            GateKind::Y => "Y = [[0, -i], [i, 0]]",
            GateKind::Z => "Z = [[1, 0], [0, -1]]",
            GateKind::S => "S = [[1, 0], [0, i]]",
            GateKind::T => "T = [[1, 0], [0, e^(iπ/4)]]",
            GateKind::P => "P(θ) = [[1, 0], [0, e^(iθ)]]",
            GateKind::RX => "Rx(θ) = [[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]",
            GateKind::RY => "Ry(θ) = [[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]",
            GateKind::RZ => "Rz(θ) = [[e^(-iθ/2), 0], [0, e^(iθ/2)]]",
            GateKind::CNOT => "CNOT|00⟩ = |00⟩, CNOT|10⟩ = |11⟩",
            GateKind::CZ => "CZ|11⟩ = -|11⟩",
            GateKind::SWAP => "SWAP|01⟩ = |10⟩",
            GateKind::CCNOT => "CCNOT|110⟩ = |111⟩",
            GateKind::CU => "CU(θ)|11⟩ = e^(iθ)|11⟩",
        }
    }
}

impl FromStr for GateKind {
    type Err = QlogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s)
            .map(|d| d.kind)
            .ok_or_else(|| QlogicError::UnsupportedGate { gate_id: s.to_string() })
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
