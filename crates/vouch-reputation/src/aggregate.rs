// crates/vouch-reputation/src/aggregate.rs
//
// Reputation aggregation: combine the direct opinion about a target with the
// opinions transmitted along trust paths from an observer, and derive the
// 0-100 score.

use serde::{Deserialize, Serialize};
use vouch_core::{Address, Attestation, AttestationSource, VouchError};

use crate::decay::EvidenceDecay;
use crate::direct::direct_reputation_with;
use crate::evidence::{EvidenceModel, DEFAULT_EVIDENCE_PER_ATTESTATION};
use crate::graph::AttestationGraph;
use crate::opinion::{fuse_all, Opinion, DEFAULT_BASE_RATE};
use crate::paths::{PathFinder, TrustPath, DEFAULT_MAX_PATHS, DEFAULT_MAX_PATH_DEPTH};

/// Default share of the transitive opinion kept before fusing with direct evidence.
pub const DEFAULT_TRANSITIVE_WEIGHT: f64 = 0.5;

/// Tunables for a reputation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationOptions {
    /// Maximum number of hops in a trust path. Default: 3.
    pub max_path_depth: usize,
    /// Scale applied to the fused transitive opinion, in [0, 1]. Default: 0.5.
    pub transitive_weight: f64,
    /// Maximum number of trust paths collected. Default: 64.
    pub max_paths: usize,
    /// Equivalent observations per attestation. Default: 1.0.
    pub evidence_per_attestation: f64,
    /// Base rate of every derived opinion. Default: 0.5.
    pub base_rate: f64,
    /// Optional age-based decay of attestation evidence.
    pub decay: Option<EvidenceDecay>,
}

impl Default for ReputationOptions {
    fn default() -> Self {
        Self {
            max_path_depth: DEFAULT_MAX_PATH_DEPTH,
            transitive_weight: DEFAULT_TRANSITIVE_WEIGHT,
            max_paths: DEFAULT_MAX_PATHS,
            evidence_per_attestation: DEFAULT_EVIDENCE_PER_ATTESTATION,
            base_rate: DEFAULT_BASE_RATE,
            decay: None,
        }
    }
}

impl ReputationOptions {
    /// Check that every option is within its documented range.
    ///
    /// `calculate_reputation` clamps instead of failing; this is for
    /// rejecting bad configuration up front.
    pub fn validate(&self) -> Result<(), VouchError> {
        if self.max_path_depth == 0 {
            return Err(VouchError::InvalidConfig(
                "max_path_depth must be at least 1".to_string(),
            ));
        }
        if !self.transitive_weight.is_finite() || !(0.0..=1.0).contains(&self.transitive_weight) {
            return Err(VouchError::InvalidConfig(format!(
                "transitive_weight must be in [0, 1], got {}",
                self.transitive_weight
            )));
        }
        if !self.evidence_per_attestation.is_finite() || self.evidence_per_attestation <= 0.0 {
            return Err(VouchError::InvalidConfig(format!(
                "evidence_per_attestation must be positive, got {}",
                self.evidence_per_attestation
            )));
        }
        if !self.base_rate.is_finite() || !(0.0..=1.0).contains(&self.base_rate) {
            return Err(VouchError::InvalidConfig(format!(
                "base_rate must be in [0, 1], got {}",
                self.base_rate
            )));
        }
        Ok(())
    }

    /// Evidence model implied by these options.
    pub fn evidence_model(&self) -> EvidenceModel {
        EvidenceModel {
            evidence_per_attestation: self.evidence_per_attestation,
            base_rate: self.base_rate,
            decay: self.decay.clone(),
        }
    }
}

/// Outcome of a reputation query. Computed fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationResult {
    /// Address the reputation is about.
    pub target: Address,
    /// round(expectation * 100), in [0, 100].
    pub score: u8,
    /// Final fused opinion.
    pub opinion: Opinion,
    /// Opinion from direct attestations alone.
    pub direct: Opinion,
    /// Fused transitive opinion before weighting, if any path was found.
    pub transitive: Option<Opinion>,
    /// Number of direct attestations used.
    pub direct_count: usize,
    /// Number of trust paths used.
    pub transitive_count: usize,
    /// Trust paths used, for diagnostics.
    pub paths: Vec<TrustPath>,
}

/// Score in [0, 100] for an opinion.
pub fn score_of(opinion: &Opinion) -> u8 {
    (opinion.expectation() * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Compute the reputation of `target`.
///
/// `direct_attestations` are the attestations about the target; entries
/// about other subjects or already revoked are ignored. When `observer` is
/// given, trust paths from the observer to the target are found in `graph`,
/// each is discounted hop by hop, the results are fused, scaled by
/// `transitive_weight`, and fused with the direct opinion. Without an
/// observer the transitive stage is skipped entirely.
pub fn calculate_reputation(
    target: &Address,
    direct_attestations: &[Attestation],
    graph: &AttestationGraph,
    observer: Option<&Address>,
    options: &ReputationOptions,
) -> ReputationResult {
    let model = options.evidence_model();

    let relevant: Vec<Attestation> = direct_attestations
        .iter()
        .filter(|a| a.is_active && a.is_about(target))
        .cloned()
        .collect();
    let skipped = direct_attestations.len() - relevant.len();
    if skipped > 0 {
        tracing::debug!(subject = %target, skipped, "ignored inactive or unrelated attestations");
    }
    let direct = direct_reputation_with(&relevant, &model);

    let paths = match observer {
        Some(observer) => PathFinder::new(graph, options.max_path_depth)
            .with_model(model.clone())
            .with_max_paths(options.max_paths)
            .routes(observer, target),
        None => Vec::new(),
    };

    let transitive_opinions: Vec<Opinion> = paths.iter().map(|p| p.opinion).collect();
    let transitive = fuse_all(&transitive_opinions);
    let opinion = match &transitive {
        Some(t) => direct.fuse(&t.scale(options.transitive_weight)),
        None => direct,
    };
    let score = score_of(&opinion);

    tracing::debug!(
        subject = %target,
        observer = ?observer.map(Address::as_str),
        direct_count = relevant.len(),
        transitive_count = paths.len(),
        score,
        "reputation calculated"
    );

    ReputationResult {
        target: target.clone(),
        score,
        opinion,
        direct,
        transitive,
        direct_count: relevant.len(),
        transitive_count: paths.len(),
        paths,
    }
}

/// Reputation queries against an attestation source.
///
/// Each query fetches fresh data from the source and builds the graph once;
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ReputationEngine<S: AttestationSource> {
    source: S,
    options: ReputationOptions,
}

impl<S: AttestationSource> ReputationEngine<S> {
    /// Create an engine with default options.
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: ReputationOptions::default(),
        }
    }

    /// Replace the options after validating them.
    pub fn with_options(mut self, options: ReputationOptions) -> Result<Self, VouchError> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// Graph over every attestation the source knows.
    pub fn graph(&self) -> Result<AttestationGraph, VouchError> {
        Ok(AttestationGraph::build(&self.source.all_attestations()?))
    }

    /// Reputation of `target`, optionally as seen from `observer`.
    pub fn reputation_of(
        &self,
        target: &Address,
        observer: Option<&Address>,
    ) -> Result<ReputationResult, VouchError> {
        let direct = self.source.attestations_about(target)?;
        let graph = match observer {
            Some(_) => self.graph()?,
            None => AttestationGraph::new(),
        };
        Ok(calculate_reputation(target, &direct, &graph, observer, &self.options))
    }
}
