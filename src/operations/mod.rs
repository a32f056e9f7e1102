// src/operations/mod.rs

//! Defines placed gate instances.
//!
//! A [`Gate`] is a closed sum type over the shapes a catalog gate can take
//! once it sits on a circuit. Each variant carries exactly the fields its
//! shape needs: two-qubit gates always have a control and a target, and
//! parameterized gates always have an angle. Construction goes through
//! [`Gate::place`] or the checked constructors so that a gate can never be
//! built with the wrong number of wires.

use crate::catalog::GateKind;
use crate::core::{QlogicError, QubitIndex, DEFAULT_GATE_PARAMETER, MAX_QUBITS, MIN_QUBITS};
use std::fmt;

/// Unique identifier of a placed gate within its circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GateInstanceId(pub u64);

impl fmt::Display for GateInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A catalog gate bound to concrete wires.
#[derive(Debug, Clone, PartialEq)] // f64 parameters rule out Eq
pub enum Gate {
    /// A one-qubit gate without a parameter (H, I, X, Y, Z, S, T).
    Single {
        /// Which gate.
        kind: GateKind,
        /// The wire it acts on.
        target: QubitIndex,
    },
    /// A one-qubit gate with an angle (P, RX, RY, RZ).
    Parameterized {
        /// Which gate.
        kind: GateKind,
        /// The wire it acts on.
        target: QubitIndex,
        /// Angle in radians.
        theta: f64,
    },
    /// A two-qubit gate (CNOT, CZ, SWAP). For SWAP the two wires are simply
    /// the two ends of the swap.
    Controlled {
        /// Which gate.
        kind: GateKind,
        /// Control wire.
        control: QubitIndex,
        /// Target wire.
        target: QubitIndex,
    },
    /// A two-qubit gate with an angle (CU).
    ControlledParameterized {
        /// Which gate.
        kind: GateKind,
        /// Control wire.
        control: QubitIndex,
        /// Target wire.
        target: QubitIndex,
        /// Angle in radians.
        theta: f64,
    },
    /// The three-qubit Toffoli gate.
    Toffoli {
        /// The two control wires.
        controls: [QubitIndex; 2],
        /// Target wire.
        target: QubitIndex,
    },
}

impl Gate {
    /// Builds a gate the way a drop onto wire `primary` does.
    ///
    /// Two-qubit gates get `control = primary` and
    /// `target = (primary + 1) mod qubit_count`; the Toffoli gate takes the
    /// next two wires after `primary` as control and target. Parameterized
    /// gates start at π/2.
    ///
    /// # Errors
    /// * `InvalidQubitCount` if `qubit_count` is outside 1..=3.
    /// * `QubitOutOfRange` if `primary >= qubit_count`.
    /// * `DuplicateQubit` if the circuit is too narrow for the gate, since the
    ///   modulo wrap would put two of its wires on the same qubit.
    pub fn place(kind: GateKind, primary: usize, qubit_count: usize) -> Result<Gate, QlogicError> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&qubit_count) {
            return Err(QlogicError::InvalidQubitCount { got: qubit_count, min: MIN_QUBITS, max: MAX_QUBITS });
        }
        if primary >= qubit_count {
            return Err(QlogicError::QubitOutOfRange { qubit: QubitIndex(primary), qubit_count });
        }
        let wire = |offset: usize| QubitIndex((primary + offset) % qubit_count);
        let theta = DEFAULT_GATE_PARAMETER;

        match kind.qubit_arity() {
            1 => Gate::single(kind, wire(0), kind.has_parameter().then_some(theta)),
            2 => Gate::controlled(kind, wire(0), wire(1), kind.has_parameter().then_some(theta)),
            _ => Gate::toffoli([wire(0), wire(1)], wire(2)),
        }
    }

    /// Checked constructor for one-qubit gates. `theta` is required iff the
    /// catalog marks the gate as parameterized; an angle given to a fixed gate
    /// is dropped.
    pub fn single(kind: GateKind, target: QubitIndex, theta: Option<f64>) -> Result<Gate, QlogicError> {
        check_arity(kind, 1)?;
        Ok(match (kind.has_parameter(), theta) {
            (true, theta) => Gate::Parameterized { kind, target, theta: theta.unwrap_or(DEFAULT_GATE_PARAMETER) },
            (false, _) => Gate::Single { kind, target },
        })
    }

    /// Checked constructor for two-qubit gates.
    pub fn controlled(
        kind: GateKind,
        control: QubitIndex,
        target: QubitIndex,
        theta: Option<f64>,
    ) -> Result<Gate, QlogicError> {
        check_arity(kind, 2)?;
        if control == target {
            return Err(QlogicError::DuplicateQubit { gate_id: kind.id(), qubit: control });
        }
        Ok(match (kind.has_parameter(), theta) {
            (true, theta) => Gate::ControlledParameterized {
                kind,
                control,
                target,
                theta: theta.unwrap_or(DEFAULT_GATE_PARAMETER),
            },
            (false, _) => Gate::Controlled { kind, control, target },
        })
    }

    /// Checked constructor for the Toffoli gate.
    pub fn toffoli(controls: [QubitIndex; 2], target: QubitIndex) -> Result<Gate, QlogicError> {
        let [a, b] = controls;
        if a == b || a == target {
            return Err(QlogicError::DuplicateQubit { gate_id: GateKind::CCNOT.id(), qubit: a });
        }
        if b == target {
            return Err(QlogicError::DuplicateQubit { gate_id: GateKind::CCNOT.id(), qubit: b });
        }
        Ok(Gate::Toffoli { controls, target })
    }

    /// The catalog kind of this gate.
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::Single { kind, .. }
            | Gate::Parameterized { kind, .. }
            | Gate::Controlled { kind, .. }
            | Gate::ControlledParameterized { kind, .. } => *kind,
            Gate::Toffoli { .. } => GateKind::CCNOT,
        }
    }

    /// Returns every wire this gate touches, controls first.
    pub fn involved_qubits(&self) -> Vec<QubitIndex> {
        match self {
            Gate::Single { target, .. } | Gate::Parameterized { target, .. } => vec![*target],
            Gate::Controlled { control, target, .. } | Gate::ControlledParameterized { control, target, .. } => {
                vec![*control, *target]
            }
            Gate::Toffoli { controls, target } => vec![controls[0], controls[1], *target],
        }
    }

    /// The angle of a parameterized gate.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            Gate::Parameterized { theta, .. } | Gate::ControlledParameterized { theta, .. } => Some(*theta),
            _ => None,
        }
    }

    /// The control wire of a two-qubit gate.
    pub fn control(&self) -> Option<QubitIndex> {
        match self {
            Gate::Controlled { control, .. } | Gate::ControlledParameterized { control, .. } => Some(*control),
            _ => None,
        }
    }

    /// The wire the gate's operation lands on.
    pub fn target(&self) -> QubitIndex {
        match self {
            Gate::Single { target, .. }
            | Gate::Parameterized { target, .. }
            | Gate::Controlled { target, .. }
            | Gate::ControlledParameterized { target, .. }
            | Gate::Toffoli { target, .. } => *target,
        }
    }

    /// Checks that the variant matches the catalog arity of its kind and that
    /// no wire is used twice. Variants can be built directly, so circuits run
    /// this before accepting a gate.
    ///
    /// # Errors
    /// * `ArityMismatch` if the number of wires differs from the catalog arity.
    /// * `DuplicateQubit` if two wires coincide.
    pub fn check_wires(&self) -> Result<(), QlogicError> {
        let wires = self.involved_qubits();
        check_arity(self.kind(), wires.len())?;
        for (i, qubit) in wires.iter().enumerate() {
            if wires[i + 1..].contains(qubit) {
                return Err(QlogicError::DuplicateQubit { gate_id: self.kind().id(), qubit: *qubit });
            }
        }
        Ok(())
    }
}

fn check_arity(kind: GateKind, got: usize) -> Result<(), QlogicError> {
    let expected = kind.qubit_arity();
    if expected != got {
        return Err(QlogicError::ArityMismatch { gate_id: kind.id(), expected, got });
    }
    Ok(())
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wires: Vec<String> = self.involved_qubits().iter().map(|q| q.to_string()).collect();
        match self.parameter() {
            Some(theta) => write!(f, "{}({:.4}) {}", self.kind(), theta, wires.join(", ")),
            None => write!(f, "{} {}", self.kind(), wires.join(", ")),
        }
    }
}

/// A gate instance owned by a circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGate {
    /// Identifier assigned by the owning circuit.
    pub id: GateInstanceId,
    /// The gate itself.
    pub gate: Gate,
}

impl PlacedGate {
    /// Shorthand for `self.gate.kind()`.
    pub fn kind(&self) -> GateKind {
        self.gate.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(i: usize) -> QubitIndex {
        QubitIndex(i)
    }

    #[test]
    fn place_single_qubit_gate() -> Result<(), QlogicError> {
        let gate = Gate::place(GateKind::H, 1, 2)?;
        assert_eq!(gate, Gate::Single { kind: GateKind::H, target: q(1) });
        assert_eq!(gate.parameter(), None);
        Ok(())
    }

    #[test]
    fn place_parameterized_gate_defaults_to_half_pi() -> Result<(), QlogicError> {
        let gate = Gate::place(GateKind::RX, 0, 1)?;
        assert_eq!(gate.parameter(), Some(std::f64::consts::FRAC_PI_2));
        Ok(())
    }

    #[test]
    fn place_two_qubit_gate_wraps_target() -> Result<(), QlogicError> {
        let gate = Gate::place(GateKind::CNOT, 2, 3)?;
        assert_eq!(gate, Gate::Controlled { kind: GateKind::CNOT, control: q(2), target: q(0) });
        assert_eq!(gate.involved_qubits(), vec![q(2), q(0)]);
        Ok(())
    }

    #[test]
    fn place_controlled_u_carries_angle() -> Result<(), QlogicError> {
        let gate = Gate::place(GateKind::CU, 0, 2)?;
        assert_eq!(gate.control(), Some(q(0)));
        assert_eq!(gate.target(), q(1));
        assert_eq!(gate.parameter(), Some(std::f64::consts::FRAC_PI_2));
        Ok(())
    }

    #[test]
    fn place_toffoli_uses_next_two_wires() -> Result<(), QlogicError> {
        let gate = Gate::place(GateKind::CCNOT, 1, 3)?;
        assert_eq!(gate, Gate::Toffoli { controls: [q(1), q(2)], target: q(0) });
        Ok(())
    }

    #[test]
    fn place_rejects_narrow_circuits() {
        assert_eq!(
            Gate::place(GateKind::CNOT, 0, 1),
            Err(QlogicError::DuplicateQubit { gate_id: "CNOT", qubit: q(0) })
        );
        assert!(matches!(Gate::place(GateKind::CCNOT, 0, 2), Err(QlogicError::DuplicateQubit { .. })));
    }

    #[test]
    fn place_rejects_bad_indices_and_widths() {
        assert!(matches!(Gate::place(GateKind::X, 3, 3), Err(QlogicError::QubitOutOfRange { .. })));
        assert!(matches!(Gate::place(GateKind::X, 0, 4), Err(QlogicError::InvalidQubitCount { got: 4, .. })));
        assert!(matches!(Gate::place(GateKind::X, 0, 0), Err(QlogicError::InvalidQubitCount { got: 0, .. })));
    }

    #[test]
    fn checked_constructors_enforce_arity() {
        assert_eq!(
            Gate::single(GateKind::CNOT, q(0), None),
            Err(QlogicError::ArityMismatch { gate_id: "CNOT", expected: 2, got: 1 })
        );
        assert!(matches!(Gate::controlled(GateKind::H, q(0), q(1), None), Err(QlogicError::ArityMismatch { .. })));
    }

    #[test]
    fn check_wires_accepts_checked_gates() -> Result<(), QlogicError> {
        for d in crate::catalog::GATE_CATALOG.iter() {
            Gate::place(d.kind, 0, 3)?.check_wires()?;
        }
        Ok(())
    }

    #[test]
    fn check_wires_rejects_hand_built_variants() {
        let narrow = Gate::Single { kind: GateKind::SWAP, target: q(0) };
        assert_eq!(narrow.check_wires(), Err(QlogicError::ArityMismatch { gate_id: "SWAP", expected: 2, got: 1 }));
        let wide = Gate::Controlled { kind: GateKind::X, control: q(0), target: q(1) };
        assert!(matches!(wide.check_wires(), Err(QlogicError::ArityMismatch { expected: 1, got: 2, .. })));
        let repeated = Gate::ControlledParameterized { kind: GateKind::CU, control: q(2), target: q(2), theta: 0.5 };
        assert_eq!(repeated.check_wires(), Err(QlogicError::DuplicateQubit { gate_id: "CU", qubit: q(2) }));
    }

    #[test]
    fn fixed_gate_drops_angle() -> Result<(), QlogicError> {
        let gate = Gate::single(GateKind::X, q(0), Some(1.0))?;
        assert_eq!(gate, Gate::Single { kind: GateKind::X, target: q(0) });
        Ok(())
    }

    #[test]
    fn display_lists_wires() -> Result<(), QlogicError> {
        assert_eq!(Gate::place(GateKind::CNOT, 0, 2)?.to_string(), "CNOT q0, q1");
        assert_eq!(Gate::single(GateKind::P, q(0), Some(1.0))?.to_string(), "P(1.0000) q0");
        Ok(())
    }
}
