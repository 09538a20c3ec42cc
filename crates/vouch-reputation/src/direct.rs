// crates/vouch-reputation/src/direct.rs
//
// Direct reputation: fold the attestations that target one address into a
// single opinion by cumulative fusion.

use vouch_core::Attestation;

use crate::evidence::EvidenceModel;
use crate::opinion::{fuse_all, Opinion};

/// Direct opinion from `attestations` using the default evidence model
/// (one observation per attestation, base rate 0.5).
///
/// Inactive attestations are skipped. With nothing left the result is the
/// vacuous opinion.
pub fn direct_reputation(attestations: &[Attestation]) -> Opinion {
    direct_reputation_with(attestations, &EvidenceModel::default())
}

/// Direct opinion from `attestations` under a custom evidence model.
pub fn direct_reputation_with(attestations: &[Attestation], model: &EvidenceModel) -> Opinion {
    let opinions: Vec<Opinion> = attestations
        .iter()
        .filter(|a| a.is_active)
        .map(|a| model.opinion_for(a))
        .collect();

    fuse_all(&opinions).unwrap_or_else(|| Opinion::vacuous(model.base_rate))
}
