pub mod config;
pub mod constants;
pub mod graph;      // Pair graph, liquidity filter, path resolver
pub mod router;     // Orchestration: pair-creation sweep over the token set
pub mod store;      // Route persistence seam

// Common utilities and types
pub mod token;
pub mod utils;

// Re-export key components
pub use config::RouterConfig;
pub use graph::{LiquidityThresholds, Pair, PairGraph, PairId, PairKind, RoutePath, resolve_path};
pub use router::PairRouter;
pub use store::{InMemoryRouteStore, RouteStore};
pub use token::{Token, TokenWrapper};
