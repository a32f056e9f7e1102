// src/simulation/results.rs
use crate::core::{BlochVector, QlogicError};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The derived view of a quantum state handed to the presentation layer.
///
/// Holds a human-readable ket label, measurement probabilities keyed by basis
/// string, an entanglement flag and a Bloch direction. Values are created
/// fresh on every derivation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantumStateResult {
    /// Ket notation or a superposition expression.
    #[serde(rename = "state")]
    state_label: String,
    /// Probabilities in lexicographic basis-string order.
    probabilities: BTreeMap<String, f64>,
    /// Whether the state is presented as entangled. Serialized as 0 or 1.
    #[serde(rename = "entanglement", serialize_with = "serialize_flag")]
    entangled: bool,
    /// Direction drawn on the Bloch sphere.
    #[serde(rename = "bloch_sphere")]
    bloch: BlochVector,
}

fn serialize_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

impl QuantumStateResult {
    /// Creates a result from its parts. (Internal visibility)
    pub(crate) fn new(
        state_label: impl Into<String>,
        probabilities: BTreeMap<String, f64>,
        entangled: bool,
        bloch: BlochVector,
    ) -> Self {
        Self { state_label: state_label.into(), probabilities, entangled, bloch }
    }

    /// A deterministic state: `hot` gets probability 1.0, every other key in
    /// `keys` gets 0.0. (Internal visibility)
    pub(crate) fn one_hot<S: AsRef<str>>(
        state_label: impl Into<String>,
        keys: &[S],
        hot: &str,
        bloch: BlochVector,
    ) -> Self {
        let probabilities = keys
            .iter()
            .map(|k| {
                let k = k.as_ref();
                (k.to_string(), if k == hot { 1.0 } else { 0.0 })
            })
            .collect();
        Self::new(state_label, probabilities, false, bloch)
    }

    /// The ket label, e.g. `(|0⟩+|1⟩)/√2`.
    pub fn state_label(&self) -> &str {
        &self.state_label
    }

    /// Probabilities keyed by basis string, iterated in lexicographic order.
    pub fn probabilities(&self) -> &BTreeMap<String, f64> {
        &self.probabilities
    }

    /// Probability of one basis string. Keys that were not populated read as 0.
    pub fn probability(&self, basis: &str) -> f64 {
        self.probabilities.get(basis).copied().unwrap_or(0.0)
    }

    /// Sum of all populated probabilities.
    pub fn total_probability(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Whether the state is presented as entangled.
    pub fn is_entangled(&self) -> bool {
        self.entangled
    }

    /// The entanglement flag as the 0/1 value shown in the UI.
    pub fn entanglement_flag(&self) -> u8 {
        u8::from(self.entangled)
    }

    /// The Bloch direction.
    pub fn bloch_vector(&self) -> BlochVector {
        self.bloch
    }

    /// Serializes the result for the presentation layer.
    pub fn to_json(&self) -> Result<String, QlogicError> {
        serde_json::to_string(self).map_err(|e| QlogicError::Serialization(e.to_string()))
    }

    /// Draws `shots` measurement outcomes from the probability distribution.
    ///
    /// Selection uses a PRNG seeded with `seed`, so the same seed always yields
    /// the same counts. Every populated basis string appears in the output,
    /// with a count of 0 if it was never drawn.
    pub fn sample_measurements(&self, shots: u64, seed: u64) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = self.probabilities.keys().map(|k| (k.clone(), 0)).collect();
        let outcomes: Vec<(&String, f64)> =
            self.probabilities.iter().filter(|(_, p)| **p > 0.0).map(|(k, p)| (k, *p)).collect();
        let Some((last, _)) = outcomes.last() else {
            return counts;
        };
        let total: f64 = outcomes.iter().map(|(_, p)| p).sum();

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..shots {
            let u: f64 = StandardUniform.sample(&mut rng);
            let p_sample = u * total; // Sample in [0, total)
            let mut cumulative: f64 = 0.0;
            // Rounding can leave p_sample just above the final cumulative sum.
            let mut chosen = *last;
            for (basis, p) in &outcomes {
                cumulative += *p;
                if p_sample < cumulative {
                    chosen = *basis;
                    break;
                }
            }
            if let Some(count) = counts.get_mut(chosen) {
                *count += 1;
            }
        }
        counts
    }
}

impl fmt::Display for QuantumStateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quantum State Result:")?;
        writeln!(f, "  State: {}", self.state_label)?;
        writeln!(f, "  Entanglement: {}", self.entanglement_flag())?;
        writeln!(f, "  Bloch: {}", self.bloch)?;
        writeln!(f, "  Probabilities:")?;
        for (basis, p) in &self.probabilities {
            writeln!(f, "    |{}⟩: {:.1}%", basis, p * 100.0)?;
        }
        Ok(())
    }
}
