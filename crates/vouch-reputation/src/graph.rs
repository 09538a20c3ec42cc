// crates/vouch-reputation/src/graph.rs
//
// Attestation graph: attester -> attestations issued, built once per query
// from a flat attestation list and consumed read-only by the path finder.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use vouch_core::{Address, Attestation};

/// Adjacency list keyed by (normalized) attester address.
///
/// Each attester's list preserves the order in which attestations were
/// supplied. Only active attestations are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttestationGraph {
    /// Outgoing edges: attester -> active attestations it issued.
    pub edges: HashMap<Address, Vec<Attestation>>,
}

impl AttestationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Build a graph from raw attestations, dropping inactive ones and
    /// grouping the rest by attester.
    pub fn build(attestations: &[Attestation]) -> Self {
        let mut graph = Self::new();
        for attestation in attestations {
            graph.insert(attestation.clone());
        }
        graph
    }

    /// Add one attestation. Inactive attestations are ignored.
    pub fn insert(&mut self, attestation: Attestation) {
        if !attestation.is_active {
            return;
        }
        self.edges
            .entry(attestation.attester.clone())
            .or_default()
            .push(attestation);
    }

    /// Attestations issued by `attester`, empty if it issued none.
    pub fn attestations_from(&self, attester: &Address) -> &[Attestation] {
        self.edges.get(attester).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct attesters.
    pub fn attester_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of stored attestations.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// True if the graph holds no attestations.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every address that appears as a subject, sorted.
    pub fn subjects(&self) -> BTreeSet<Address> {
        self.edges
            .values()
            .flatten()
            .map(|a| a.subject.clone())
            .collect()
    }

    /// Attesters sorted by address, for stable display.
    pub fn attesters(&self) -> Vec<&Address> {
        let mut attesters: Vec<&Address> = self.edges.keys().collect();
        attesters.sort();
        attesters
    }
}

/// Free-function form of [`AttestationGraph::build`].
pub fn build_attestation_graph(attestations: &[Attestation]) -> AttestationGraph {
    AttestationGraph::build(attestations)
}
