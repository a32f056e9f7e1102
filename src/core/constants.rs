//! Numeric constants shared by the simulators and the circuit model.

/// Constants used when deriving displayed states.
pub mod qlogic_constants {
    /// Angle assigned to freshly placed parameterized gates (π/2).
    pub const DEFAULT_GATE_PARAMETER: f64 = std::f64::consts::FRAC_PI_2;
    /// Rounded 1/√2 used for the T gate Bloch direction, as shown in the UI.
    pub const DISPLAY_FRAC_1_SQRT_2: f64 = 0.707;
    /// Smallest circuit width.
    pub const MIN_QUBITS: usize = 1;
    /// Largest circuit width.
    pub const MAX_QUBITS: usize = 3;
    /// Default tolerance for normalization and Bloch-ball checks.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
}
