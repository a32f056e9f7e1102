// tests/simulator_tests.rs

use qlogic::{
    check_amplitude_consistency, validate_result, BasisBit, BlochVector, CnotSimulator, GateSimulator,
    HadamardSimulator, PauliXSimulator, PhaseGateSimulator, PhaseVariant, QlogicError,
};

// Every reachable configuration of a simulator, built by replaying setters.
fn single_qubit_inputs() -> Vec<(BasisBit, bool)> {
    vec![(BasisBit::Zero, false), (BasisBit::Zero, true), (BasisBit::One, false), (BasisBit::One, true)]
}

fn check_consistent<S: GateSimulator>(sim: &S) -> Result<(), QlogicError> {
    let result = sim.derive_state();
    validate_result(&result, None)?;
    check_amplitude_consistency(&result, &sim.amplitudes(), Some(1e-12))
}

fn assert_double_toggle_is_identity<S: GateSimulator>(mut sim: S) {
    let before = sim.derive_state();
    sim.toggle_gate();
    sim.toggle_gate();
    assert_eq!(sim.derive_state(), before);
}

#[test]
fn test_pauli_x_flip_from_zero() {
    let mut sim = PauliXSimulator::new();
    sim.set_initial_state(BasisBit::Zero);
    sim.toggle_gate();

    assert_eq!(sim.final_state(), BasisBit::One);
    let result = sim.derive_state();
    assert_eq!(result.probability("0"), 0.0);
    assert_eq!(result.probability("1"), 1.0);
    assert_eq!(result.bloch_vector(), BlochVector::SOUTH);
}

#[test]
fn test_cnot_flips_target_when_control_set() {
    let mut sim = CnotSimulator::new();
    sim.set_control(BasisBit::One);
    sim.set_target(BasisBit::Zero);
    sim.toggle_gate();

    assert_eq!(sim.result_basis_string(), "11");
    let result = sim.derive_state();
    assert_eq!(result.probability("11"), 1.0);
    for other in ["00", "01", "10"] {
        assert_eq!(result.probability(other), 0.0);
    }
    assert_eq!(result.probabilities().len(), 4);
}

#[test]
fn test_t_gate_on_one() {
    let mut sim = PhaseGateSimulator::new();
    sim.select_variant(PhaseVariant::T);
    sim.set_initial_state(BasisBit::One);
    sim.toggle_gate();

    let result = sim.derive_state();
    assert_eq!(result.bloch_vector(), BlochVector::new(-0.707, -0.707, 0.0));
    assert_eq!(result.state_label(), "e^(iπ/4)|1⟩");
    assert_eq!(result.probability("0"), 0.0);
    assert_eq!(result.probability("1"), 1.0);
}

#[test]
fn test_hadamard_from_zero() {
    let mut sim = HadamardSimulator::new();
    sim.toggle_gate();
    let result = sim.derive_state();
    assert_eq!(result.state_label(), "(|0⟩+|1⟩)/√2");
    assert_eq!(result.probability("0"), 0.5);
    assert_eq!(result.probability("1"), 0.5);
    assert_eq!(result.bloch_vector(), BlochVector::new(1.0, 0.0, 0.0));
}

#[test]
fn test_double_toggle_restores_result() {
    for (initial, applied) in single_qubit_inputs() {
        let mut h = HadamardSimulator::new();
        h.set_initial_state(initial);
        let mut x = PauliXSimulator::new();
        x.set_initial_state(initial);
        let mut p = PhaseGateSimulator::new();
        p.set_initial_state(initial);
        p.select_variant(PhaseVariant::T);
        if applied {
            h.toggle_gate();
            x.toggle_gate();
            p.toggle_gate();
        }
        assert_double_toggle_is_identity(h);
        assert_double_toggle_is_identity(x);
        assert_double_toggle_is_identity(p);
    }

    let mut cnot = CnotSimulator::new();
    cnot.set_control(BasisBit::One);
    assert_double_toggle_is_identity(cnot);
}

#[test]
fn test_every_simulator_state_is_consistent() -> Result<(), QlogicError> {
    for (initial, applied) in single_qubit_inputs() {
        let mut h = HadamardSimulator::new();
        let mut x = PauliXSimulator::new();
        h.set_initial_state(initial);
        x.set_initial_state(initial);
        if applied {
            h.toggle_gate();
            x.toggle_gate();
        }
        check_consistent(&h)?;
        check_consistent(&x)?;

        for variant in [PhaseVariant::S, PhaseVariant::T] {
            let mut p = PhaseGateSimulator::new();
            p.select_variant(variant);
            p.set_initial_state(initial);
            if applied {
                p.toggle_gate();
            }
            check_consistent(&p)?;
        }
    }

    for control in [BasisBit::Zero, BasisBit::One] {
        for target in [BasisBit::Zero, BasisBit::One] {
            for applied in [false, true] {
                let mut c = CnotSimulator::new();
                c.set_control(control);
                c.set_target(target);
                if applied {
                    c.toggle_gate();
                }
                check_consistent(&c)?;
            }
        }
    }
    Ok(())
}

#[test]
fn test_reset_returns_every_simulator_to_ground() {
    let mut h = HadamardSimulator::new();
    h.set_initial_state(BasisBit::One);
    h.toggle_gate();
    h.reset();
    assert_eq!(h.derive_state(), HadamardSimulator::new().derive_state());

    let mut c = CnotSimulator::new();
    c.set_control(BasisBit::One);
    c.set_target(BasisBit::One);
    c.toggle_gate();
    c.reset();
    assert_eq!(c.derive_state().state_label(), "|00⟩");
    assert!(!c.is_applied());
}
