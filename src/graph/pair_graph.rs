use crate::graph::pair::{Pair, PairId};
use crate::token::{Token, TokenWrapper};
use ahash::RandomState;
use alloy_primitives::{Address, U256};
use eyre::eyre;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub type FastHasher = RandomState;
/// FastHashMap using ahash
pub type FastHashMap<K, V> = HashMap<K, V, FastHasher>;

/// The liquidity-pair graph: tokens are nodes, pairs are edges.
///
/// The graph is an explicit context struct owned by the orchestration layer,
/// so a fresh one can be built per test. Tokens and pairs are append-only;
/// only pair reserves mutate after insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PairGraph {
    // pair_id -> pair (reserves mutate in place, identity never does)
    pairs: FastHashMap<PairId, Pair>,
    // token_address -> token (keep reference for fast access of token details)
    tokens: FastHashMap<Address, TokenWrapper>,
    // token_address -> pair ids the token is an endpoint of, in insertion order.
    // Insertion order doubles as the resolver's traversal tie-break.
    adjacency: FastHashMap<Address, Vec<PairId>>,
    // all token addresses in registration order, drives the full sweep
    token_order: Vec<Address>,
}

impl PairGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pair edge.
    ///
    /// Creates both endpoint tokens if absent and appends the pair id to both
    /// endpoints' adjacency lists. Endpoint order is preserved exactly as
    /// supplied. Self-loop pairs and duplicate pair ids are rejected.
    pub fn add_pair(&mut self, pair: Pair) -> eyre::Result<()> {
        if pair.token0 == pair.token1 {
            return Err(eyre!("Pair connects a token to itself: {:?}", pair.id));
        }
        if self.pairs.contains_key(&pair.id) {
            return Err(eyre!("Pair already exists in graph: {:?}", pair.id));
        }

        self.register_token(pair.token0);
        self.register_token(pair.token1);

        self.adjacency.entry(pair.token0).or_default().push(pair.id);
        self.adjacency.entry(pair.token1).or_default().push(pair.id);

        debug!(
            pair = %pair,
            total_tokens = self.token_count(),
            total_pairs = self.pairs.len() + 1,
            "Pair added to graph"
        );

        self.pairs.insert(pair.id, pair);

        Ok(())
    }

    /// Update the reserves of an existing pair. Does not trigger any route
    /// recomputation by itself; reserves are only consulted at search time.
    pub fn update_reserves(&mut self, pair_id: PairId, reserve0: U256, reserve1: U256) -> eyre::Result<()> {
        let Some(pair) = self.pairs.get_mut(&pair_id) else {
            return Err(eyre!("Pair not found in graph: {:?}", pair_id));
        };
        pair.reserve0 = reserve0;
        pair.reserve1 = reserve1;
        Ok(())
    }

    /// The adjacency list of a token, in pair-creation order. Empty for an
    /// unknown token.
    pub fn edges_of(&self, token: Address) -> &[PairId] {
        self.adjacency.get(&token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn pair(&self, pair_id: PairId) -> Option<&Pair> {
        self.pairs.get(&pair_id)
    }

    pub fn token(&self, address: Address) -> Option<&TokenWrapper> {
        self.tokens.get(&address)
    }

    /// All registered token addresses, in registration order.
    pub fn tokens(&self) -> impl Iterator<Item = Address> + '_ {
        self.token_order.iter().copied()
    }

    pub fn token_count(&self) -> usize {
        self.token_order.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    fn register_token(&mut self, address: Address) {
        self.tokens.entry(address).or_insert_with(|| {
            self.token_order.push(address);
            Arc::new(Token::new(address))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::pair::PairKind;

    fn pair(id: u8, token0: Address, token1: Address) -> Pair {
        Pair::new(PairId::repeat_byte(id), token0, token1, U256::from(1_000_000), U256::from(1_000_000), PairKind::Volatile)
    }

    #[test]
    fn test_add_pair_registers_tokens_and_adjacency() -> eyre::Result<()> {
        let token0 = Address::repeat_byte(1);
        let token1 = Address::repeat_byte(2);

        let mut graph = PairGraph::new();
        graph.add_pair(pair(10, token0, token1))?;

        assert_eq!(graph.token_count(), 2);
        assert_eq!(graph.pair_count(), 1);
        assert_eq!(graph.edges_of(token0), &[PairId::repeat_byte(10)]);
        assert_eq!(graph.edges_of(token1), &[PairId::repeat_byte(10)]);
        assert!(graph.token(token0).is_some());
        assert!(graph.token(token1).is_some());

        Ok(())
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() -> eyre::Result<()> {
        let token0 = Address::repeat_byte(1);
        let token1 = Address::repeat_byte(2);
        let token2 = Address::repeat_byte(3);

        let mut graph = PairGraph::new();
        graph.add_pair(pair(10, token0, token1))?;
        graph.add_pair(pair(11, token2, token0))?;
        graph.add_pair(pair(12, token0, token2))?;

        assert_eq!(
            graph.edges_of(token0),
            &[PairId::repeat_byte(10), PairId::repeat_byte(11), PairId::repeat_byte(12)]
        );

        Ok(())
    }

    #[test]
    fn test_self_loop_rejected() {
        let token0 = Address::repeat_byte(1);

        let mut graph = PairGraph::new();
        let result = graph.add_pair(pair(10, token0, token0));

        assert!(result.is_err());
        assert_eq!(graph.token_count(), 0);
        assert_eq!(graph.pair_count(), 0);
    }

    #[test]
    fn test_duplicate_pair_id_rejected() -> eyre::Result<()> {
        let token0 = Address::repeat_byte(1);
        let token1 = Address::repeat_byte(2);
        let token2 = Address::repeat_byte(3);

        let mut graph = PairGraph::new();
        graph.add_pair(pair(10, token0, token1))?;

        assert!(graph.add_pair(pair(10, token0, token2)).is_err());
        assert_eq!(graph.pair_count(), 1);

        Ok(())
    }

    #[test]
    fn test_update_reserves() -> eyre::Result<()> {
        let token0 = Address::repeat_byte(1);
        let token1 = Address::repeat_byte(2);

        let mut graph = PairGraph::new();
        graph.add_pair(pair(10, token0, token1))?;
        graph.update_reserves(PairId::repeat_byte(10), U256::from(5), U256::from(7))?;

        let updated = graph.pair(PairId::repeat_byte(10)).unwrap();
        assert_eq!(updated.reserve0, U256::from(5));
        assert_eq!(updated.reserve1, U256::from(7));

        assert!(graph.update_reserves(PairId::repeat_byte(99), U256::ZERO, U256::ZERO).is_err());

        Ok(())
    }

    #[test]
    fn test_edges_of_unknown_token_is_empty() {
        let graph = PairGraph::new();
        assert!(graph.edges_of(Address::repeat_byte(9)).is_empty());
    }

    #[test]
    fn test_token_sweep_order_is_registration_order() -> eyre::Result<()> {
        let token0 = Address::repeat_byte(1);
        let token1 = Address::repeat_byte(2);
        let token2 = Address::repeat_byte(3);

        let mut graph = PairGraph::new();
        graph.add_pair(pair(10, token0, token1))?;
        graph.add_pair(pair(11, token2, token1))?;

        let order: Vec<Address> = graph.tokens().collect();
        assert_eq!(order, vec![token0, token1, token2]);

        Ok(())
    }

    #[test]
    fn test_serialize_pair_graph() -> eyre::Result<()> {
        let mut graph = PairGraph::new();
        graph.add_pair(pair(10, Address::repeat_byte(1), Address::repeat_byte(2)))?;

        let serialized = serde_json::to_string(&graph)?;
        let deserialized: PairGraph = serde_json::from_str(&serialized)?;

        assert_eq!(deserialized.token_count(), 2);
        assert_eq!(deserialized.pair_count(), 1);

        Ok(())
    }
}
