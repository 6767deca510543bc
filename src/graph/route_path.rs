use crate::graph::pair::PairId;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An ordered route of pair hops from a source token to the reference token.
///
/// A token routed to itself is encoded as the self-route sentinel: equal
/// source and target with zero pair hops. This is distinct from any resolved
/// route, which always carries at least one pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePath {
    pub source: Address,
    pub target: Address,
    // The pairs of the route e.g. pair0 -> pair1, runs source -> target
    pub pairs: Vec<PairId>,
}

impl Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoutePath({:#} -> {:#}, pairs={:?})",
            self.source,
            self.target,
            self.pairs.iter().map(|p| format!("{p:#}")).collect::<Vec<String>>()
        )
    }
}

impl RoutePath {
    pub fn new(source: Address, target: Address, pairs: Vec<PairId>) -> Self {
        RoutePath { source, target, pairs }
    }

    /// The sentinel route for a token that is the reference token itself.
    pub fn self_route(target: Address) -> Self {
        RoutePath { source: target, target, pairs: vec![] }
    }

    pub fn is_self_route(&self) -> bool {
        self.source == self.target && self.pairs.is_empty()
    }

    /// The hop count of the route
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains_pair(&self, pair_id: PairId) -> bool {
        self.pairs.contains(&pair_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_route_sentinel() {
        let target = Address::repeat_byte(1);
        let route = RoutePath::self_route(target);

        assert!(route.is_self_route());
        assert!(route.is_empty());
        assert_eq!(route.len(), 0);
        assert_eq!(route.source, route.target);
    }

    #[test]
    fn test_one_hop_route_is_not_self_route() {
        let route = RoutePath::new(Address::repeat_byte(1), Address::repeat_byte(2), vec![PairId::repeat_byte(3)]);

        assert!(!route.is_self_route());
        assert_eq!(route.len(), 1);
        assert!(route.contains_pair(PairId::repeat_byte(3)));
    }
}
