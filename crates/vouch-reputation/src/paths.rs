// crates/vouch-reputation/src/paths.rs
//
// Trust-path discovery: bounded depth-first search over the attestation
// graph from an observer to a target.
//
// A path never revisits an address already on it, and never grows beyond
// `max_depth` hops, so the search terminates on arbitrarily cyclic graphs.
// Cost is bounded by branching^max_depth; `max_paths` caps it further,
// keeping the shortest paths.

use serde::{Deserialize, Serialize};
use vouch_core::Address;

use crate::evidence::EvidenceModel;
use crate::graph::AttestationGraph;
use crate::opinion::Opinion;
use crate::transitive::transitive_trust;

/// Default bound on the number of hops in a trust path.
pub const DEFAULT_MAX_PATH_DEPTH: usize = 3;

/// Default bound on the number of paths collected per query.
pub const DEFAULT_MAX_PATHS: usize = 64;

/// One discovered chain from observer to target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustPath {
    /// Addresses along the path, observer first and target last.
    pub addresses: Vec<Address>,
    /// Opinion carried by each hop; `opinions[i]` is what `addresses[i]`
    /// said about `addresses[i + 1]`.
    pub opinions: Vec<Opinion>,
    /// Opinion transmitted through the whole chain.
    pub opinion: Opinion,
}

impl TrustPath {
    /// Number of hops.
    pub fn len(&self) -> usize {
        self.opinions.len()
    }

    /// True for a path with no hops.
    pub fn is_empty(&self) -> bool {
        self.opinions.is_empty()
    }

    /// Expectation of the transmitted opinion.
    pub fn expectation(&self) -> f64 {
        self.opinion.expectation()
    }
}

/// Depth-bounded path search over one attestation graph.
#[derive(Debug, Clone)]
pub struct PathFinder<'g> {
    graph: &'g AttestationGraph,
    model: EvidenceModel,
    max_depth: usize,
    max_paths: usize,
}

impl<'g> PathFinder<'g> {
    /// Create a finder with the default evidence model and path cap.
    pub fn new(graph: &'g AttestationGraph, max_depth: usize) -> Self {
        Self {
            graph,
            model: EvidenceModel::default(),
            max_depth,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }

    /// Use `model` to derive hop opinions.
    pub fn with_model(mut self, model: EvidenceModel) -> Self {
        self.model = model;
        self
    }

    /// Stop after collecting `max_paths` paths.
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// All paths from `observer` to `target` within the depth bound,
    /// shortest first and in graph order within one length.
    ///
    /// Paths are collected by iterative deepening, so when `max_paths` cuts
    /// the search short no path is dropped while a longer one is kept.
    pub fn routes(&self, observer: &Address, target: &Address) -> Vec<TrustPath> {
        let mut found = Vec::new();
        if observer == target || self.max_depth == 0 || self.max_paths == 0 {
            return found;
        }

        let mut on_path = vec![observer.clone()];
        let mut hops = Vec::with_capacity(self.max_depth);
        for depth in 1..=self.max_depth {
            let frontier = self.walk(observer, target, depth, &mut on_path, &mut hops, &mut found);
            if found.len() >= self.max_paths {
                tracing::debug!(max_paths = self.max_paths, depth, "trust path cap reached");
                break;
            }
            // No partial path reached this depth, so none can be longer.
            if !frontier {
                break;
            }
        }

        tracing::trace!(
            observer = %observer,
            subject = %target,
            paths = found.len(),
            "trust path search finished"
        );
        found
    }

    /// Collect paths of exactly `depth` hops. Returns true if some partial
    /// path reached `depth` hops at an address other than the target.
    fn walk(
        &self,
        node: &Address,
        target: &Address,
        depth: usize,
        on_path: &mut Vec<Address>,
        hops: &mut Vec<Opinion>,
        found: &mut Vec<TrustPath>,
    ) -> bool {
        let mut frontier = false;
        for attestation in self.graph.attestations_from(node) {
            if found.len() >= self.max_paths {
                break;
            }
            if !attestation.is_active {
                continue;
            }
            let next = &attestation.subject;
            if on_path.contains(next) {
                continue;
            }

            hops.push(self.model.opinion_for(attestation));
            if hops.len() == depth {
                if next == target {
                    let mut addresses = on_path.clone();
                    addresses.push(next.clone());
                    found.push(TrustPath {
                        addresses,
                        opinions: hops.clone(),
                        opinion: transitive_trust(hops),
                    });
                } else {
                    frontier = true;
                }
            } else if next != target {
                on_path.push(next.clone());
                frontier |= self.walk(next, target, depth, on_path, hops, found);
                on_path.pop();
            }
            hops.pop();
        }
        frontier
    }
}

/// Hop opinions of every path from `observer` to `target` of at most
/// `max_depth` hops, shortest first. An unreachable target yields an empty
/// list. Unlike [`PathFinder::routes`] with its default cap, nothing is cut.
pub fn find_trust_paths(
    observer: &Address,
    target: &Address,
    graph: &AttestationGraph,
    max_depth: usize,
) -> Vec<Vec<Opinion>> {
    PathFinder::new(graph, max_depth)
        .with_max_paths(usize::MAX)
        .routes(observer, target)
        .into_iter()
        .map(|path| path.opinions)
        .collect()
}
