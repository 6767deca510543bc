use crate::graph::pair::Pair;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Minimum-reserve thresholds that gate which pairs the resolver may route
/// through. Pairs failing the predicate are invisible to the search, not
/// merely deprioritized.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct LiquidityThresholds {
    pub min_reserve0: U256,
    pub min_reserve1: U256,
}

impl LiquidityThresholds {
    pub fn new(min_reserve0: U256, min_reserve1: U256) -> Self {
        Self { min_reserve0, min_reserve1 }
    }

    pub fn is_tradable(&self, pair: &Pair) -> bool {
        pair.reserve0 >= self.min_reserve0 && pair.reserve1 >= self.min_reserve1
    }
}
