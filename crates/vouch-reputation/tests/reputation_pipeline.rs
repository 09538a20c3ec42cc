// crates/vouch-reputation/tests/reputation_pipeline.rs
//
// End-to-end tests of the reputation pipeline through the public API:
// raw attestations -> graph -> trust paths -> aggregation -> summary.

use std::collections::HashSet;

use vouch_core::{Address, Attestation, MemorySource};
use vouch_reputation::{
    build_attestation_graph, calculate_reputation, direct_reputation, find_trust_paths, summarize,
    transitive_trust, DecayFunction, EvidenceDecay, PathFinder, ReputationEngine,
    ReputationOptions, TrustCategory,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn addr(s: &str) -> Address {
    Address::new(s)
}

/// A small web of trust with mixed-case addresses as they arrive from an
/// indexer:
///
/// ```text
/// Me -> Alice (95) -> Shop (90)
/// Me -> Bob   (80) -> Shop (70)
///       Bob        -> Alice (85)
///       Alice      -> Me (90)            (cycle back to the observer)
/// Eve -> Shop (5)
/// Mallory -> Shop (100) revoked
/// ```
fn web_of_trust() -> Vec<Attestation> {
    vec![
        Attestation::new("0xMe", "0xAlice", 95).at(1_700_000_000),
        Attestation::new("0xME", "0xBob", 80).at(1_700_000_100),
        Attestation::new("0xAlice", "0xShop", 90).at(1_700_000_200),
        Attestation::new("0xBob", "0xSHOP", 70).at(1_700_000_300),
        Attestation::new("0xBob", "0xalice", 85).at(1_700_000_400),
        Attestation::new("0xALICE", "0xme", 90).at(1_700_000_500),
        Attestation::new("0xEve", "0xShop", 5).at(1_700_000_600),
        Attestation::new("0xMallory", "0xShop", 100)
            .at(1_700_000_700)
            .revoked(),
    ]
}

fn about(atts: &[Attestation], subject: &str) -> Vec<Attestation> {
    let subject = addr(subject);
    atts.iter().filter(|a| a.is_about(&subject)).cloned().collect()
}

// ---------------------------------------------------------------------------
// Graph and paths
// ---------------------------------------------------------------------------

#[test]
fn test_graph_groups_by_lower_cased_attester_and_drops_revoked() {
    let graph = build_attestation_graph(&web_of_trust());
    assert_eq!(graph.attestations_from(&addr("0xme")).len(), 2);
    assert_eq!(graph.attestations_from(&addr("0xalice")).len(), 2);
    assert!(graph.attestations_from(&addr("0xmallory")).is_empty());
    assert_eq!(graph.edge_count(), 7);
}

#[test]
fn test_paths_are_bounded_and_acyclic() {
    let graph = build_attestation_graph(&web_of_trust());
    let routes = PathFinder::new(&graph, 2).routes(&addr("0xMe"), &addr("0xShop"));
    assert_eq!(routes.len(), 2);
    for path in &routes {
        assert!(path.len() <= 2);
        let unique: HashSet<&Address> = path.addresses.iter().collect();
        assert_eq!(unique.len(), path.addresses.len());
    }

    // With three hops the Me -> Bob -> Alice -> Shop chain appears too.
    let deeper = find_trust_paths(&addr("0xMe"), &addr("0xShop"), &graph, 3);
    assert_eq!(deeper.len(), 3);
    assert!(deeper.iter().all(|p| p.len() <= 3));
}

#[test]
fn test_longer_paths_carry_more_uncertainty() {
    let graph = build_attestation_graph(&web_of_trust());
    let routes = PathFinder::new(&graph, 3).routes(&addr("0xMe"), &addr("0xShop"));
    let short = routes.iter().find(|p| p.len() == 2).unwrap();
    let long = routes.iter().find(|p| p.len() == 3).unwrap();
    assert!(long.opinion.uncertainty > short.opinion.uncertainty);
    assert_eq!(short.opinion, transitive_trust(&short.opinions));
}

// ---------------------------------------------------------------------------
// Aggregation and summary
// ---------------------------------------------------------------------------

#[test]
fn test_global_reputation_has_no_transitive_part() {
    let atts = web_of_trust();
    let graph = build_attestation_graph(&atts);
    let result = calculate_reputation(
        &addr("0xShop"),
        &about(&atts, "0xshop"),
        &graph,
        None,
        &ReputationOptions::default(),
    );
    assert_eq!(result.transitive_count, 0);
    assert!(result.paths.is_empty());
    assert_eq!(result.direct_count, 3);
    assert_eq!(result.opinion, direct_reputation(&about(&atts, "0xshop")));
}

#[test]
fn test_personal_reputation_uses_observer_paths() {
    let atts = web_of_trust();
    let graph = build_attestation_graph(&atts);
    let options = ReputationOptions::default();
    let result = calculate_reputation(
        &addr("0xShop"),
        &about(&atts, "0xshop"),
        &graph,
        Some(&addr("0xME")),
        &options,
    );
    assert_eq!(result.transitive_count, 3);
    assert_eq!(result.paths.len(), result.transitive_count);
    assert!(result.score <= 100);

    let sum = result.opinion.belief + result.opinion.disbelief + result.opinion.uncertainty;
    assert!((sum - 1.0).abs() < 1e-9);

    let summary = summarize(&result);
    assert_eq!(summary.total_evidence, 6);
    assert_eq!(summary.category, TrustCategory::from_score(result.score));
}

#[test]
fn test_mixed_reputation_is_moderate() {
    let atts = vec![
        Attestation::new("a", "subject", 95),
        Attestation::new("b", "subject", 5),
    ];
    let result = calculate_reputation(
        &addr("subject"),
        &atts,
        &build_attestation_graph(&atts),
        None,
        &ReputationOptions::default(),
    );
    let e = result.opinion.expectation();
    assert!(e > 0.3 && e < 0.9, "expectation was {}", e);
    assert_eq!(summarize(&result).category, TrustCategory::Neutral);
}

#[test]
fn test_decay_weakens_old_attestations() {
    let atts = vec![
        Attestation::new("a", "subject", 90).at(0),
        Attestation::new("b", "subject", 90).at(0),
    ];
    let graph = build_attestation_graph(&atts);
    let fresh = calculate_reputation(
        &addr("subject"),
        &atts,
        &graph,
        None,
        &ReputationOptions::default(),
    );
    let decayed = calculate_reputation(
        &addr("subject"),
        &atts,
        &graph,
        None,
        &ReputationOptions {
            decay: Some(EvidenceDecay {
                function: DecayFunction::Exponential { half_life_days: 30 },
                as_of: 365 * 86_400,
            }),
            ..ReputationOptions::default()
        },
    );
    assert!(decayed.opinion.uncertainty > fresh.opinion.uncertainty);
    assert!(decayed.score < fresh.score);
}

#[test]
fn test_engine_matches_direct_calls() {
    let atts = web_of_trust();
    let engine = ReputationEngine::new(MemorySource::new(atts.clone()));
    let via_engine = engine
        .reputation_of(&addr("0xshop"), Some(&addr("0xme")))
        .unwrap();
    let via_fn = calculate_reputation(
        &addr("0xshop"),
        &about(&atts, "0xshop"),
        &build_attestation_graph(&atts),
        Some(&addr("0xme")),
        &ReputationOptions::default(),
    );
    assert_eq!(via_engine, via_fn);
}

#[test]
fn test_results_serialize_to_json() {
    let atts = web_of_trust();
    let result = calculate_reputation(
        &addr("0xShop"),
        &about(&atts, "0xshop"),
        &build_attestation_graph(&atts),
        Some(&addr("0xMe")),
        &ReputationOptions::default(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["target"], "0xshop");
    assert_eq!(json["transitive_count"], 3);
    let summary = serde_json::to_value(summarize(&result)).unwrap();
    assert!(summary["confidence"].as_u64().unwrap() <= 100);
}

#[test]
fn test_capped_reputation_keeps_direct_edge_supplied_last() {
    let names: Vec<String> = (0..10).map(|i| format!("0xN{}", i)).collect();
    let mut atts = Vec::new();
    for from in &names {
        for to in &names {
            if from != to && !(from == "0xN0" && to == "0xN9") {
                atts.push(Attestation::new(from.as_str(), to.as_str(), 75));
            }
        }
    }
    atts.push(Attestation::new("0xN0", "0xN9", 75));
    let graph = build_attestation_graph(&atts);

    let result = calculate_reputation(
        &addr("0xn9"),
        &about(&atts, "0xn9"),
        &graph,
        Some(&addr("0xn0")),
        &ReputationOptions::default(),
    );
    assert_eq!(result.transitive_count, 64);
    assert_eq!(result.paths.iter().filter(|p| p.len() == 1).count(), 1);
    assert_eq!(result.paths.iter().filter(|p| p.len() == 2).count(), 8);
}
