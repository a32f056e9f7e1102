// src/circuits/mod.rs

//! Defines the circuit model: an ordered sequence of placed gates on a fixed
//! number of qubit wires.
//!
//! The circuit is the only owner of its [`PlacedGate`]s. It is mutated by the
//! palette (place, remove, clear) and read by the simulation engine.

use crate::catalog::{self, GateKind};
use crate::core::{QlogicError, QubitIndex, MAX_QUBITS, MIN_QUBITS};
use crate::operations::{Gate, GateInstanceId, PlacedGate};
use std::fmt;
use tracing::trace;

/// An ordered sequence of placed gates on `qubit_count` wires.
///
/// Invariant: every wire referenced by a gate is `< qubit_count`.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    /// Number of wires (1..=3).
    qubit_count: usize,
    /// Placed gates in drop order.
    gates: Vec<PlacedGate>,
    /// Next instance id handed out by `add_gate`.
    next_id: u64,
}

impl Circuit {
    /// Creates an empty circuit with `qubit_count` wires.
    ///
    /// # Errors
    /// `InvalidQubitCount` unless `1 <= qubit_count <= 3`.
    pub fn new(qubit_count: usize) -> Result<Self, QlogicError> {
        check_qubit_count(qubit_count)?;
        Ok(Self { qubit_count, gates: Vec::new(), next_id: 0 })
    }

    /// Appends an already built gate and returns its instance id.
    ///
    /// # Errors
    /// * `ArityMismatch` or `DuplicateQubit` if the gate's wires don't fit its
    ///   kind (see [`Gate::check_wires`]).
    /// * `QubitOutOfRange` if the gate touches a wire the circuit doesn't have.
    pub fn add_gate(&mut self, gate: Gate) -> Result<GateInstanceId, QlogicError> {
        gate.check_wires()?;
        for qubit in gate.involved_qubits() {
            if qubit.0 >= self.qubit_count {
                return Err(QlogicError::QubitOutOfRange { qubit, qubit_count: self.qubit_count });
            }
        }
        let id = GateInstanceId(self.next_id);
        self.next_id += 1;
        trace!(%id, %gate, "placed gate");
        self.gates.push(PlacedGate { id, gate });
        Ok(id)
    }

    /// Drops a gate of `kind` on wire `primary`, assigning control/target and
    /// a default angle as [`Gate::place`] does.
    pub fn place(&mut self, kind: GateKind, primary: usize) -> Result<GateInstanceId, QlogicError> {
        let gate = Gate::place(kind, primary, self.qubit_count)?;
        self.add_gate(gate)
    }

    /// Like [`Circuit::place`] but resolves the gate by catalog identifier.
    ///
    /// # Errors
    /// `UnsupportedGate` if `gate_id` is not in the catalog.
    pub fn place_by_id(&mut self, gate_id: &str, primary: usize) -> Result<GateInstanceId, QlogicError> {
        let descriptor = catalog::lookup(gate_id)
            .ok_or_else(|| QlogicError::UnsupportedGate { gate_id: gate_id.to_string() })?;
        self.place(descriptor.kind, primary)
    }

    /// Removes the gate with the given instance id and returns it.
    pub fn remove(&mut self, id: GateInstanceId) -> Result<PlacedGate, QlogicError> {
        let pos = self.gates.iter().position(|g| g.id == id).ok_or(QlogicError::GateNotFound(id.0))?;
        trace!(%id, "removed gate");
        Ok(self.gates.remove(pos))
    }

    /// Removes every gate. Instance ids keep increasing across clears.
    pub fn clear(&mut self) {
        trace!(removed = self.gates.len(), "cleared circuit");
        self.gates.clear();
    }

    /// Changes the number of wires.
    ///
    /// # Errors
    /// * `InvalidQubitCount` for widths outside 1..=3.
    /// * `QubitOutOfRange` if a placed gate would fall off the narrower circuit;
    ///   the circuit is left unchanged.
    pub fn set_qubit_count(&mut self, qubit_count: usize) -> Result<(), QlogicError> {
        check_qubit_count(qubit_count)?;
        if let Some(qubit) = self.qubits().into_iter().find(|q| q.0 >= qubit_count) {
            return Err(QlogicError::QubitOutOfRange { qubit, qubit_count });
        }
        self.qubit_count = qubit_count;
        Ok(())
    }

    /// Number of wires.
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Returns the placed gates in order.
    pub fn gates(&self) -> &[PlacedGate] {
        &self.gates
    }

    /// Looks up a placed gate by instance id.
    pub fn get(&self, id: GateInstanceId) -> Option<&PlacedGate> {
        self.gates.iter().find(|g| g.id == id)
    }

    /// True if at least one gate of `kind` is placed.
    pub fn contains(&self, kind: GateKind) -> bool {
        self.gates.iter().any(|g| g.kind() == kind)
    }

    /// Sorted, deduplicated wires used by any gate.
    pub fn qubits(&self) -> Vec<QubitIndex> {
        let mut qubits: Vec<QubitIndex> = self.gates.iter().flat_map(|g| g.gate.involved_qubits()).collect();
        qubits.sort();
        qubits.dedup();
        qubits
    }

    /// Returns the total number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

fn check_qubit_count(qubit_count: usize) -> Result<(), QlogicError> {
    if !(MIN_QUBITS..=MAX_QUBITS).contains(&qubit_count) {
        return Err(QlogicError::InvalidQubitCount { got: qubit_count, min: MIN_QUBITS, max: MAX_QUBITS });
    }
    Ok(())
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
///
/// Placement errors are deferred to [`CircuitBuilder::build`], which reports
/// the first one.
pub struct CircuitBuilder {
    qubit_count: usize,
    steps: Vec<BuildStep>,
}

enum BuildStep {
    Place(GateKind, usize),
    Add(Gate),
}

impl CircuitBuilder {
    /// Creates a builder for a circuit of `qubit_count` wires.
    pub fn new(qubit_count: usize) -> Self {
        Self { qubit_count, steps: Vec::new() }
    }

    /// Drops a gate of `kind` on wire `primary`.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn place(mut self, kind: GateKind, primary: usize) -> Self {
        self.steps.push(BuildStep::Place(kind, primary));
        self
    }

    /// Appends a fully specified gate.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.steps.push(BuildStep::Add(gate));
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Result<Circuit, QlogicError> {
        let mut circuit = Circuit::new(self.qubit_count)?;
        for step in self.steps {
            match step {
                BuildStep::Place(kind, primary) => circuit.place(kind, primary)?,
                BuildStep::Add(gate) => circuit.add_gate(gate)?,
            };
        }
        Ok(circuit)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_gates = self.gates.len();
        writeln!(f, "qlogic::Circuit[{} gates on {} qubits]", num_gates, self.qubit_count)?;
        if num_gates == 0 {
            for r in 0..self.qubit_count {
                writeln!(f, "q{}: |0⟩───────", r)?;
            }
            return Ok(());
        }

        const GATE_WIDTH: usize = 7; // e.g. "───H───"
        const WIRE: &str = "───────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // grid[row][time] holds the segment drawn on that wire at that step;
        // v_connect[row][time] is the connector drawn below the row.
        let mut grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_gates]; self.qubit_count];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_gates]; self.qubit_count];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total = GATE_WIDTH - slen;
                let pre = total / 2;
                let post = total - pre;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre), symbol, H_WIRE.to_string().repeat(post))
            }
        }

        for (t, placed) in self.gates.iter().enumerate() {
            let wires = placed.gate.involved_qubits();
            match &placed.gate {
                Gate::Single { kind, target } | Gate::Parameterized { kind, target, .. } => {
                    grid[target.0][t] = format_gate(kind.descriptor().symbol);
                }
                Gate::Controlled { kind: GateKind::SWAP, control, target } => {
                    grid[control.0][t] = format_gate("x");
                    grid[target.0][t] = format_gate("x");
                }
                Gate::Controlled { kind, control, target } => {
                    let symbol = match kind {
                        GateKind::CNOT => "⊕",
                        _ => "Z",
                    };
                    grid[control.0][t] = format_gate("@");
                    grid[target.0][t] = format_gate(symbol);
                }
                Gate::ControlledParameterized { control, target, .. } => {
                    grid[control.0][t] = format_gate("@");
                    grid[target.0][t] = format_gate("U");
                }
                Gate::Toffoli { controls, target } => {
                    grid[controls[0].0][t] = format_gate("@");
                    grid[controls[1].0][t] = format_gate("@");
                    grid[target.0][t] = format_gate("⊕");
                }
            }
            if wires.len() > 1 {
                let r_min = wires.iter().map(|q| q.0).min().unwrap_or(0);
                let r_max = wires.iter().map(|q| q.0).max().unwrap_or(0);
                for row in v_connect.iter_mut().take(r_max).skip(r_min) {
                    row[t] = V_WIRE;
                }
            }
        }

        for r in 0..self.qubit_count {
            writeln!(f, "q{}: |0⟩{}", r, grid[r].join(""))?;
            if r + 1 < self.qubit_count {
                write!(f, "       ")?; // width of "qN: |0⟩"
                for t in 0..num_gates {
                    let pre = (GATE_WIDTH - 1) / 2;
                    let post = GATE_WIDTH - 1 - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), v_connect[r][t], " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_unsupported_widths() {
        assert!(matches!(Circuit::new(0), Err(QlogicError::InvalidQubitCount { got: 0, min: 1, max: 3 })));
        assert!(matches!(Circuit::new(4), Err(QlogicError::InvalidQubitCount { got: 4, .. })));
    }

    #[test]
    fn place_assigns_increasing_ids() -> Result<(), QlogicError> {
        let mut circuit = Circuit::new(2)?;
        let a = circuit.place(GateKind::H, 0)?;
        let b = circuit.place(GateKind::CNOT, 0)?;
        assert!(a < b);
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.get(b).map(|g| g.kind()), Some(GateKind::CNOT));
        Ok(())
    }

    #[test]
    fn place_by_unknown_id_is_an_error() -> Result<(), QlogicError> {
        let mut circuit = Circuit::new(1)?;
        assert_eq!(
            circuit.place_by_id("Fredkin", 0),
            Err(QlogicError::UnsupportedGate { gate_id: "Fredkin".to_string() })
        );
        assert!(circuit.is_empty());
        Ok(())
    }

    #[test]
    fn add_gate_rejects_out_of_range_wire() -> Result<(), QlogicError> {
        let mut circuit = Circuit::new(2)?;
        let gate = Gate::single(GateKind::X, QubitIndex(2), None)?;
        assert_eq!(
            circuit.add_gate(gate),
            Err(QlogicError::QubitOutOfRange { qubit: QubitIndex(2), qubit_count: 2 })
        );
        Ok(())
    }

    #[test]
    fn remove_and_clear() -> Result<(), QlogicError> {
        let mut circuit = Circuit::new(2)?;
        let h = circuit.place(GateKind::H, 0)?;
        circuit.place(GateKind::X, 1)?;
        let removed = circuit.remove(h)?;
        assert_eq!(removed.kind(), GateKind::H);
        assert!(!circuit.contains(GateKind::H));
        assert_eq!(circuit.remove(h), Err(QlogicError::GateNotFound(h.0)));

        circuit.clear();
        assert!(circuit.is_empty());
        let next = circuit.place(GateKind::Z, 0)?;
        assert!(next > h, "ids are not reused after clear");
        Ok(())
    }

    #[test]
    fn narrowing_keeps_gates_in_range() -> Result<(), QlogicError> {
        let mut circuit = Circuit::new(3)?;
        circuit.place(GateKind::H, 2)?;
        assert!(matches!(circuit.set_qubit_count(2), Err(QlogicError::QubitOutOfRange { .. })));
        assert_eq!(circuit.qubit_count(), 3);
        circuit.clear();
        circuit.set_qubit_count(1)?;
        assert_eq!(circuit.qubit_count(), 1);
        Ok(())
    }

    #[test]
    fn builder_reports_first_placement_error() {
        let result = CircuitBuilder::new(1).place(GateKind::H, 0).place(GateKind::CNOT, 0).build();
        assert!(matches!(result, Err(QlogicError::DuplicateQubit { gate_id: "CNOT", .. })));
    }

    #[test]
    fn add_gate_rejects_malformed_variants() -> Result<(), QlogicError> {
        let mut circuit = Circuit::new(1)?;
        circuit.add_gate(Gate::Single { kind: GateKind::H, target: QubitIndex(0) })?;
        assert_eq!(
            circuit.add_gate(Gate::Single { kind: GateKind::CNOT, target: QubitIndex(0) }),
            Err(QlogicError::ArityMismatch { gate_id: "CNOT", expected: 2, got: 1 })
        );
        assert_eq!(circuit.len(), 1);

        let mut circuit = Circuit::new(2)?;
        let same_wire = Gate::Controlled { kind: GateKind::CNOT, control: QubitIndex(1), target: QubitIndex(1) };
        assert_eq!(
            circuit.add_gate(same_wire),
            Err(QlogicError::DuplicateQubit { gate_id: "CNOT", qubit: QubitIndex(1) })
        );
        let toffoli = Gate::Toffoli { controls: [QubitIndex(0), QubitIndex(1)], target: QubitIndex(0) };
        assert!(matches!(circuit.add_gate(toffoli), Err(QlogicError::DuplicateQubit { .. })));
        assert!(circuit.is_empty());
        Ok(())
    }

    #[test]
    fn display_draws_swap() -> Result<(), QlogicError> {
        let circuit = CircuitBuilder::new(2).place(GateKind::SWAP, 0).build()?;
        let text = circuit.to_string();
        assert_eq!(text.matches("───x───").count(), 2);
        assert!(text.contains('│'));
        Ok(())
    }

    #[test]
    fn display_draws_controlled_u() -> Result<(), QlogicError> {
        let circuit = CircuitBuilder::new(2).place(GateKind::CU, 1).build()?;
        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "q0: |0⟩───U───");
        assert_eq!(lines[3], "q1: |0⟩───@───");
        Ok(())
    }

    #[test]
    fn display_draws_toffoli() -> Result<(), QlogicError> {
        let circuit = CircuitBuilder::new(3).place(GateKind::CCNOT, 0).build()?;
        let text = circuit.to_string();
        assert!(text.contains("q0: |0⟩───@───"));
        assert!(text.contains("q1: |0⟩───@───"));
        assert!(text.contains("q2: |0⟩───⊕───"));
        assert_eq!(text.matches('│').count(), 2);
        Ok(())
    }

    #[test]
    fn display_draws_controlled_gate() -> Result<(), QlogicError> {
        let circuit = CircuitBuilder::new(2).place(GateKind::H, 0).place(GateKind::CNOT, 0).build()?;
        let text = circuit.to_string();
        assert!(text.starts_with("qlogic::Circuit[2 gates on 2 qubits]"));
        assert!(text.contains("───H───"));
        assert!(text.contains("───@───"));
        assert!(text.contains("───⊕───"));
        assert!(text.contains('│'));
        Ok(())
    }
}
