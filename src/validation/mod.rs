// src/validation/mod.rs

//! Checks that a `QuantumStateResult` is physically consistent.
//!
//! The three views of a result (probabilities, Bloch direction and, for the
//! toggle simulators, amplitudes) are derived independently, so these checks
//! confirm they still describe one state.

use crate::core::{BlochVector, QlogicError, DEFAULT_TOLERANCE};
use crate::simulation::QuantumStateResult;
use num_complex::Complex;
use tracing::warn;

/// Checks that the probabilities sum to 1.0 and each lies in `[0, 1]`.
///
/// # Arguments
/// * `result` - The result to check.
/// * `tolerance` - Allowed deviation (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QlogicError::Incoherence)` otherwise.
pub fn check_normalization(result: &QuantumStateResult, tolerance: Option<f64>) -> Result<(), QlogicError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    if let Some((basis, p)) = result.probabilities().iter().find(|(_, p)| **p < -tolerance || **p > 1.0 + tolerance) {
        return Err(incoherent(format!("Probability of |{}⟩ is {} (outside [0, 1])", basis, p)));
    }
    let total = result.total_probability();
    if (total - 1.0).abs() > tolerance {
        return Err(incoherent(format!(
            "Probabilities sum to {} (deviation > {})",
            total, tolerance
        )));
    }
    Ok(())
}

/// Checks that a Bloch vector lies inside the unit ball.
pub fn check_bloch_containment(bloch: &BlochVector, tolerance: Option<f64>) -> Result<(), QlogicError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    if !bloch.is_within_ball(tolerance) {
        return Err(incoherent(format!(
            "Bloch vector {} has squared length {:.6} > 1",
            bloch,
            bloch.norm_sqr()
        )));
    }
    Ok(())
}

/// Checks that `|amplitude_k|²` matches the probability of basis string `k`.
///
/// Amplitudes are indexed in basis-string order, so `amplitudes[i]` belongs to
/// the `i`-th key of `result.probabilities()`.
pub fn check_amplitude_consistency(
    result: &QuantumStateResult,
    amplitudes: &[Complex<f64>],
    tolerance: Option<f64>,
) -> Result<(), QlogicError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    if amplitudes.len() != result.probabilities().len() {
        return Err(incoherent(format!(
            "{} amplitudes for {} basis strings",
            amplitudes.len(),
            result.probabilities().len()
        )));
    }
    for ((basis, p), amp) in result.probabilities().iter().zip(amplitudes) {
        let from_amplitude = amp.norm_sqr();
        if (from_amplitude - p).abs() > tolerance {
            return Err(incoherent(format!(
                "|amp({})|² = {:.6} but probability is {:.6}",
                basis, from_amplitude, p
            )));
        }
    }
    Ok(())
}

/// Runs normalization and Bloch containment checks.
pub fn validate_result(result: &QuantumStateResult, tolerance: Option<f64>) -> Result<(), QlogicError> {
    check_normalization(result, tolerance)?;
    check_bloch_containment(&result.bloch_vector(), tolerance)?;
    Ok(())
}

fn incoherent(message: String) -> QlogicError {
    warn!(%message, "state validation failed");
    QlogicError::Incoherence { message }
}
