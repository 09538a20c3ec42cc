// crates/vouch-reputation/src/transitive.rs
//
// Transitive trust: discount opinions hop by hop along a trust path.

use crate::opinion::Opinion;

/// Opinion transmitted through a whole chain of hops.
///
/// `path[0]` is the observer's opinion of the first intermediary and the last
/// entry is the final intermediary's opinion of the target. Each step
/// discounts the next hop by the trust accumulated so far:
///
/// ```text
/// result = path[0]
/// result = discount(result, path[i])   for i in 1..n
/// ```
///
/// Uncertainty never decreases as the chain grows. An empty path carries no
/// information and yields the vacuous opinion.
pub fn transitive_trust(path: &[Opinion]) -> Opinion {
    let Some((first, rest)) = path.split_first() else {
        return Opinion::default();
    };
    rest.iter().fold(*first, |acc, hop| acc.discount(hop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_path_is_vacuous() {
        assert!(transitive_trust(&[]).is_vacuous());
    }

    #[test]
    fn test_single_hop_is_unchanged() {
        let hop = Opinion::from_evidence(70.0, 5.0, 0.5);
        assert_eq!(transitive_trust(&[hop]), hop);
    }

    #[test]
    fn test_two_hop_chain_discounts_by_first_belief() {
        let first = Opinion::try_new(0.5, 0.2, 0.3, 0.5).unwrap();
        let second = Opinion::try_new(0.8, 0.1, 0.1, 0.5).unwrap();
        let out = transitive_trust(&[first, second]);
        assert!((out.belief - 0.4).abs() < 1e-12);
        assert!((out.disbelief - 0.05).abs() < 1e-12);
        assert!((out.uncertainty - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_distrusted_intermediary_transmits_nothing() {
        let distrusted = Opinion::try_new(0.0, 1.0, 0.0, 0.5).unwrap();
        let glowing = Opinion::from_evidence(100.0, 50.0, 0.5);
        assert!(transitive_trust(&[distrusted, glowing]).is_vacuous());
    }

    fn arb_hop() -> impl Strategy<Value = Opinion> {
        (0.0f64..=100.0, 0.0f64..30.0).prop_map(|(t, r)| Opinion::from_evidence(t, r, 0.5))
    }

    proptest! {
        #[test]
        fn test_longer_chains_are_never_more_certain(path in prop::collection::vec(arb_hop(), 1..6)) {
            let mut last = transitive_trust(&path[..1]).uncertainty;
            for end in 2..=path.len() {
                let u = transitive_trust(&path[..end]).uncertainty;
                prop_assert!(u >= last - 1e-12, "uncertainty fell from {} to {}", last, u);
                last = u;
            }
        }

        #[test]
        fn test_chain_opinions_sum_to_one(path in prop::collection::vec(arb_hop(), 0..6)) {
            let o = transitive_trust(&path);
            prop_assert!((o.belief + o.disbelief + o.uncertainty - 1.0).abs() < 1e-9);
        }
    }
}
