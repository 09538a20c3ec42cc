// crates/vouch-reputation/src/lib.rs
//
// vouch-reputation: Evidence-based subjective logic (EBSL) reputation engine.
//
// Converts peer attestations ("I trust X at level Y") into uncertainty-aware
// opinions about an address. Direct attestations are fused; attestations
// reachable from an observer through the trust graph are discounted hop by
// hop and fused in at a configurable weight. Every operation is a pure
// function of its inputs.

pub mod aggregate;
pub mod decay;
pub mod direct;
pub mod evidence;
pub mod graph;
pub mod opinion;
pub mod paths;
pub mod summary;
pub mod transitive;

pub use aggregate::{calculate_reputation, ReputationEngine, ReputationOptions, ReputationResult};
pub use decay::{DecayFunction, EvidenceDecay};
pub use direct::{direct_reputation, direct_reputation_with};
pub use evidence::EvidenceModel;
pub use graph::{build_attestation_graph, AttestationGraph};
pub use opinion::{
    discount_opinion, expectation, fuse, fuse_all, generic_discount, opinion_from_evidence,
    scalar_multiply, Opinion,
};
pub use paths::{find_trust_paths, PathFinder, TrustPath};
pub use summary::{summarize, Summary, TrustCategory};
pub use transitive::transitive_trust;
