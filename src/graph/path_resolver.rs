use crate::graph::liquidity::LiquidityThresholds;
use crate::graph::pair::PairId;
use crate::graph::pair_graph::{FastHasher, PairGraph};
use crate::graph::route_path::RoutePath;
use alloy_primitives::Address;
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// One enqueued hop of the search. Entries live in an arena and point back to
/// their parent by index, so reconstructing a route is a walk over plain
/// integers with no reference cycles.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    pair_id: PairId,
    far_token: Address,
    parent: Option<usize>,
}

/// Find the shortest route (by hop count) from `source` to `target`.
///
/// The search is a breadth-first traversal over pair-edges rather than token
/// nodes: the same pool is never enqueued twice, but a token can still be
/// reached through multiple distinct pools. Pairs failing the liquidity
/// thresholds are skipped entirely. Among equal-length routes the first one
/// found wins; traversal follows adjacency insertion order, i.e.
/// pair-creation order.
///
/// `None` is a normal outcome for a token with no tradable connectivity to
/// the target yet, not an error.
pub fn resolve_path(
    graph: &PairGraph,
    thresholds: &LiquidityThresholds,
    source: Address,
    target: Address,
) -> Option<RoutePath> {
    if source == target {
        return Some(RoutePath::self_route(target));
    }

    let mut arena: Vec<FrontierEntry> = Vec::new();
    let mut frontier: VecDeque<usize> = VecDeque::new();
    // Pairs already enqueued; guarantees termination on cyclic graphs.
    let mut visited: HashSet<PairId, FastHasher> = HashSet::default();

    for &pair_id in graph.edges_of(source) {
        let Some(pair) = graph.pair(pair_id) else { continue };
        if !thresholds.is_tradable(pair) {
            continue;
        }
        visited.insert(pair_id);
        arena.push(FrontierEntry { pair_id, far_token: pair.other_token(source), parent: None });
        frontier.push_back(arena.len() - 1);
    }

    while let Some(entry_index) = frontier.pop_front() {
        let far_token = arena[entry_index].far_token;

        if far_token == target {
            let route = reconstruct_route(&arena, entry_index, source, target);
            trace!(source = %source, target = %target, hops = route.len(), "Route resolved");
            return Some(route);
        }

        for &next_pair_id in graph.edges_of(far_token) {
            if visited.contains(&next_pair_id) {
                continue;
            }
            let Some(next_pair) = graph.pair(next_pair_id) else { continue };
            if !thresholds.is_tradable(next_pair) {
                continue;
            }
            visited.insert(next_pair_id);
            arena.push(FrontierEntry {
                pair_id: next_pair_id,
                far_token: next_pair.other_token(far_token),
                parent: Some(entry_index),
            });
            frontier.push_back(arena.len() - 1);
        }
    }

    trace!(source = %source, target = %target, "No route found");
    None
}

/// Walk the parent pointers from the terminal entry back to a root, then
/// reverse so the route runs source -> target.
fn reconstruct_route(arena: &[FrontierEntry], terminal: usize, source: Address, target: Address) -> RoutePath {
    let mut pairs = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(index) = cursor {
        pairs.push(arena[index].pair_id);
        cursor = arena[index].parent;
    }
    pairs.reverse();
    RoutePath::new(source, target, pairs)
}
