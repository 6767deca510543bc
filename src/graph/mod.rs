pub mod liquidity;
pub mod pair;
pub mod pair_graph;
pub mod path_resolver;
pub mod route_path;

pub use liquidity::LiquidityThresholds;
pub use pair::{Pair, PairId, PairKind};
pub use pair_graph::{FastHashMap, FastHasher, PairGraph};
pub use path_resolver::resolve_path;
pub use route_path::RoutePath;
