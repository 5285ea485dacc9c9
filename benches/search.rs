use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uno_minimax::core::{GameState, PlayerId};
use uno_minimax::minimax::{build_tree, AlphaBeta, MinimaxAgent, SearchConfig};

fn benchmark_build_tree(c: &mut Criterion) {
    let state = GameState::from_seed(12345);

    c.bench_function("build_tree_depth_3", |b| {
        b.iter(|| build_tree(black_box(&state), PlayerId::ONE, black_box(3)))
    });
}

fn benchmark_pruned_vs_exhaustive(c: &mut Criterion) {
    let state = GameState::from_seed(12345);
    let tree = build_tree(&state, PlayerId::ONE, 3);

    let mut group = c.benchmark_group("search_depth_3");
    group.bench_function("alpha_beta", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            AlphaBeta::new().search(black_box(&mut tree))
        })
    });
    group.bench_function("exhaustive", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            AlphaBeta::new().exhaustive(black_box(&mut tree))
        })
    });
    group.finish();
}

fn benchmark_agent_decision(c: &mut Criterion) {
    let state = GameState::from_seed(12345);
    let mut agent = MinimaxAgent::new(PlayerId::ONE, SearchConfig::default())
        .expect("default config is valid");

    c.bench_function("agent_decision_depth_3", |b| {
        b.iter(|| agent.search(black_box(&state)))
    });
}

criterion_group!(
    benches,
    benchmark_build_tree,
    benchmark_pruned_vs_exhaustive,
    benchmark_agent_decision
);
criterion_main!(benches);
