use crate::graph::pair_graph::FastHashMap;
use crate::graph::route_path::RoutePath;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Persistence seam for resolved routes, keyed by source token.
///
/// Hosts with their own entity store implement this; absence is explicit
/// (`None`), never a sentinel value. Saving is last-writer-wins with no merge
/// semantics.
pub trait RouteStore {
    /// Overwrite the stored route for `token`.
    fn save_path(&mut self, token: Address, path: RoutePath);

    /// The last successfully resolved route for `token`, if any.
    fn load_path(&self, token: Address) -> Option<&RoutePath>;
}

/// Plain keyed-map store, used by tests and hosts without their own backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryRouteStore {
    routes: FastHashMap<Address, RoutePath>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteStore for InMemoryRouteStore {
    fn save_path(&mut self, token: Address, path: RoutePath) {
        self.routes.insert(token, path);
    }

    fn load_path(&self, token: Address) -> Option<&RoutePath> {
        self.routes.get(&token)
    }
}
