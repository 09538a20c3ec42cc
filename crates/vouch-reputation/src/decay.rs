// crates/vouch-reputation/src/decay.rs
//
// Time decay of attestation evidence.
//
// Older attestations count as fewer equivalent observations, so an address
// has to keep earning attestations to keep a confident reputation. The
// evaluation instant is always supplied by the caller; nothing here reads
// the clock.

use serde::{Deserialize, Serialize};

/// Seconds in one day, the unit decay rates are expressed in.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Decay function applied to the evidence weight of an attestation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecayFunction {
    /// Exponential decay: weight * 0.5^(age / half_life).
    /// Evidence halves every `half_life_days` days.
    Exponential {
        /// Number of days for the evidence weight to halve.
        half_life_days: u64,
    },
    /// Linear decay: weight * max(0, 1 - decay_per_day * age).
    /// Evidence loses a fixed fraction of its weight each day until none is left.
    Linear {
        /// Fraction of the original weight lost per day.
        decay_per_day: f64,
    },
}

/// A decay function pinned to the instant reputation is evaluated at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDecay {
    /// How evidence weight falls off with age.
    pub function: DecayFunction,
    /// Unix timestamp (seconds) ages are measured from.
    pub as_of: u64,
}

impl EvidenceDecay {
    /// Multiplier in [0, 1] for an attestation made at `timestamp`.
    ///
    /// Attestations dated after `as_of` are not decayed.
    pub fn factor(&self, timestamp: u64) -> f64 {
        let age_secs = self.as_of.saturating_sub(timestamp);
        apply_decay(1.0, age_secs, &self.function)
    }
}

/// Apply a decay function to an evidence weight.
///
/// # Arguments
/// * `weight` - The undecayed evidence weight.
/// * `age_secs` - Seconds between the attestation and the evaluation instant.
/// * `function` - The decay function to apply.
///
/// # Returns
/// The decayed weight, always finite and >= 0.0.
pub fn apply_decay(weight: f64, age_secs: u64, function: &DecayFunction) -> f64 {
    let age_days = age_secs as f64 / SECONDS_PER_DAY as f64;
    let decayed = match function {
        DecayFunction::Exponential { half_life_days } => {
            if *half_life_days == 0 {
                return 0.0;
            }
            weight * 0.5_f64.powf(age_days / *half_life_days as f64)
        }
        DecayFunction::Linear { decay_per_day } => {
            let rate = if decay_per_day.is_finite() {
                decay_per_day.max(0.0)
            } else {
                0.0
            };
            weight * (1.0 - rate * age_days).max(0.0)
        }
    };
    if decayed.is_finite() {
        decayed.max(0.0)
    } else {
        0.0
    }
}
