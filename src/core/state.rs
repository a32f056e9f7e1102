// src/core/state.rs

use super::error::QlogicError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single classical bit of a computational basis state, `|0⟩` or `|1⟩`.
///
/// The toggle simulators only ever start from basis states, so their whole
/// input is a handful of these bits plus an "applied" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum BasisBit {
    /// The `|0⟩` state (north pole of the Bloch sphere).
    #[default]
    Zero,
    /// The `|1⟩` state (south pole of the Bloch sphere).
    One,
}

impl BasisBit {
    /// Returns the opposite bit.
    pub fn flipped(self) -> Self {
        match self {
            BasisBit::Zero => BasisBit::One,
            BasisBit::One => BasisBit::Zero,
        }
    }

    /// Flips the bit iff `flip` is true (`self XOR flip`).
    pub fn xor(self, flip: bool) -> Self {
        if flip { self.flipped() } else { self }
    }

    /// Character used in basis strings.
    pub fn as_char(self) -> char {
        match self {
            BasisBit::Zero => '0',
            BasisBit::One => '1',
        }
    }

    /// Index of this bit in a two-component amplitude vector.
    pub fn index(self) -> usize {
        match self {
            BasisBit::Zero => 0,
            BasisBit::One => 1,
        }
    }

    /// The pole of the Bloch sphere this basis state sits on.
    pub fn bloch_pole(self) -> BlochVector {
        match self {
            BasisBit::Zero => BlochVector::NORTH,
            BasisBit::One => BlochVector::SOUTH,
        }
    }

    /// Ket label such as `|0⟩`.
    pub fn ket(self) -> String {
        format!("|{}⟩", self.as_char())
    }
}

impl TryFrom<char> for BasisBit {
    type Error = QlogicError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(BasisBit::Zero),
            '1' => Ok(BasisBit::One),
            other => Err(QlogicError::InvalidBasisBit(other)),
        }
    }
}

impl fmt::Display for BasisBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Direction on (or inside) the Bloch sphere used to draw a single qubit.
///
/// Components are normalized coordinates in `[-1, 1]`. Pure states sit on the
/// surface; the Bell state is drawn at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlochVector {
    /// Component along the X axis (`|+⟩` direction).
    pub x: f64,
    /// Component along the Y axis (`|+i⟩` direction).
    pub y: f64,
    /// Component along the Z axis (`|0⟩` direction).
    pub z: f64,
}

impl BlochVector {
    /// `|0⟩`.
    pub const NORTH: BlochVector = BlochVector { x: 0.0, y: 0.0, z: 1.0 };
    /// `|1⟩`.
    pub const SOUTH: BlochVector = BlochVector { x: 0.0, y: 0.0, z: -1.0 };
    /// Maximally mixed / entangled marker.
    pub const ORIGIN: BlochVector = BlochVector { x: 0.0, y: 0.0, z: 0.0 };

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared length `x² + y² + z²`.
    pub fn norm_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// True when the vector lies inside the unit ball, allowing `tolerance` slack.
    pub fn is_within_ball(&self, tolerance: f64) -> bool {
        self.norm_sqr() <= 1.0 + tolerance
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// All basis strings of `qubit_count` bits in lexicographic order.
///
/// `basis_strings(2)` yields `["00", "01", "10", "11"]`.
pub fn basis_strings(qubit_count: usize) -> Vec<String> {
    (0..1usize << qubit_count)
        .map(|i| format!("{:0width$b}", i, width = qubit_count))
        .collect()
}

/// The all-zero basis string of the given width.
pub fn ground_basis_string(qubit_count: usize) -> String {
    "0".repeat(qubit_count)
}
