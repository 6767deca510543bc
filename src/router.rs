use crate::config::RouterConfig;
use crate::graph::liquidity::LiquidityThresholds;
use crate::graph::pair::{Pair, PairId, PairKind};
use crate::graph::pair_graph::PairGraph;
use crate::graph::path_resolver::resolve_path;
use crate::graph::route_path::RoutePath;
use crate::store::route_store::{InMemoryRouteStore, RouteStore};
use alloy_primitives::{Address, U256};
use tracing::debug;

/// Orchestrates the pair graph, the resolver and the route store.
///
/// Every pair creation triggers a full recompute of the route from every
/// known token to the reference token. Reserve updates never do; a stale
/// route persists until the next creation sweep reconfirms or replaces it.
/// The router is single-threaded and synchronous; wrap it in one coarse lock
/// if a concurrent host ever drives it.
#[derive(Debug, Clone)]
pub struct PairRouter<S: RouteStore = InMemoryRouteStore> {
    graph: PairGraph,
    thresholds: LiquidityThresholds,
    reference_token: Address,
    store: S,
}

impl PairRouter<InMemoryRouteStore> {
    pub fn new(config: &RouterConfig) -> Self {
        Self::with_store(config, InMemoryRouteStore::new())
    }
}

impl<S: RouteStore> PairRouter<S> {
    /// Build a router around a host-provided route store.
    pub fn with_store(config: &RouterConfig, store: S) -> Self {
        Self {
            graph: PairGraph::new(),
            thresholds: config.thresholds(),
            reference_token: config.reference_token,
            store,
        }
    }

    /// Handle a pair-creation notification.
    ///
    /// Adds the edge, then sweeps every registered token (including the two
    /// just added) and saves each route that resolves. Tokens that resolve to
    /// nothing keep their previous record untouched.
    pub fn on_pair_created(
        &mut self,
        pair_id: PairId,
        token_a: Address,
        token_b: Address,
        reserve_a: U256,
        reserve_b: U256,
        stable: bool,
    ) -> eyre::Result<()> {
        self.graph.add_pair(Pair::new(pair_id, token_a, token_b, reserve_a, reserve_b, PairKind::from(stable)))?;

        let mut resolved = 0usize;
        for token in self.graph.tokens() {
            if let Some(route) = resolve_path(&self.graph, &self.thresholds, token, self.reference_token) {
                self.store.save_path(token, route);
                resolved += 1;
            }
        }

        debug!(
            pair = %pair_id,
            tokens_swept = self.graph.token_count(),
            routes_resolved = resolved,
            "Route sweep completed"
        );

        Ok(())
    }

    /// Apply a reserve snapshot for an existing pair. Reserves only influence
    /// the liquidity filter at the next sweep; no routes are recomputed here.
    pub fn update_reserves(&mut self, pair_id: PairId, reserve0: U256, reserve1: U256) -> eyre::Result<()> {
        self.graph.update_reserves(pair_id, reserve0, reserve1)
    }

    /// The stored route from `token` to the reference token, if one has ever
    /// been resolved.
    pub fn route_to_reference(&self, token: Address) -> Option<&RoutePath> {
        self.store.load_path(token)
    }

    pub fn reference_token(&self) -> Address {
        self.reference_token
    }

    pub fn graph(&self) -> &PairGraph {
        &self.graph
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
