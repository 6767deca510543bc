pub mod route_store;

pub use route_store::{InMemoryRouteStore, RouteStore};
