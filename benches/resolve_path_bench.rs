use alloy_primitives::{Address, U256};
use criterion::{Criterion, criterion_group, criterion_main};
use pair_router::{LiquidityThresholds, Pair, PairGraph, PairId, PairKind, resolve_path};
use std::hint::black_box;

const CHAIN_LENGTH: usize = 64;

fn benchmark_resolve_path(c: &mut Criterion) {
    let tokens: Vec<Address> = (0..CHAIN_LENGTH).map(|_| Address::random()).collect();
    let reserve = U256::from(1_000_000u64);

    // one long chain plus a shortcut in the middle
    let mut graph = PairGraph::new();
    for window in tokens.windows(2) {
        let pair = Pair::new(PairId::random(), window[0], window[1], reserve, reserve, PairKind::Volatile);
        graph.add_pair(pair).unwrap();
    }
    let shortcut = Pair::new(PairId::random(), tokens[0], tokens[CHAIN_LENGTH / 2], reserve, reserve, PairKind::Volatile);
    graph.add_pair(shortcut).unwrap();

    let thresholds = LiquidityThresholds::new(U256::from(1_000), U256::from(1_000));
    let source = tokens[0];
    let target = *tokens.last().unwrap();

    c.bench_function("resolve_path", |b| {
        b.iter(|| {
            resolve_path(black_box(&graph), black_box(&thresholds), black_box(source), black_box(target)).unwrap();
        })
    });
}

criterion_group!(benches, benchmark_resolve_path);
criterion_main!(benches);
