// crates/vouch-reputation/src/evidence.rs
//
// Mapping from attestations to hop opinions.
//
// The direct calculator and the path finder both go through EvidenceModel,
// so an attestation is worth the same whether it targets the subject
// directly or forms one hop of a trust path.

use serde::{Deserialize, Serialize};
use vouch_core::Attestation;

use crate::decay::EvidenceDecay;
use crate::opinion::{Opinion, DEFAULT_BASE_RATE};

/// Evidence weight carried by a single attestation unless configured otherwise.
pub const DEFAULT_EVIDENCE_PER_ATTESTATION: f64 = 1.0;

/// How attestations are turned into opinions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceModel {
    /// Equivalent observations one attestation stands for.
    pub evidence_per_attestation: f64,
    /// Base rate given to every derived opinion.
    pub base_rate: f64,
    /// Optional age-based decay of the evidence weight.
    pub decay: Option<EvidenceDecay>,
}

impl Default for EvidenceModel {
    fn default() -> Self {
        Self {
            evidence_per_attestation: DEFAULT_EVIDENCE_PER_ATTESTATION,
            base_rate: DEFAULT_BASE_RATE,
            decay: None,
        }
    }
}

impl EvidenceModel {
    /// Evidence weight of `attestation` after decay. Never negative.
    pub fn weight_of(&self, attestation: &Attestation) -> f64 {
        let base = if self.evidence_per_attestation.is_finite() {
            self.evidence_per_attestation.max(0.0)
        } else {
            0.0
        };
        match &self.decay {
            Some(decay) => base * decay.factor(attestation.timestamp),
            None => base,
        }
    }

    /// Opinion expressed by a single attestation.
    pub fn opinion_for(&self, attestation: &Attestation) -> Opinion {
        Opinion::from_evidence(
            f64::from(attestation.clamped_trust_level()),
            self.weight_of(attestation),
            self.base_rate,
        )
    }
}
