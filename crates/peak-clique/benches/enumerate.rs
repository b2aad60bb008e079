use peak_clique::{max_cliques_with, EnumerationOptions, OrderingStrategy, SearchStrategy};
use peak_core::RngHandle;
use peak_graph::{gen_gnp, gen_planted_cliques};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn enumerate_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let sparse = gen_gnp(1_000, 0.01, &mut rng).unwrap();
    let planted = gen_planted_cliques(500, &[14, 12, 10, 10], 0.02, &mut rng).unwrap();

    let recursive = EnumerationOptions::default().with_strategy(SearchStrategy::Recursive);
    let stacked = EnumerationOptions::default().with_strategy(SearchStrategy::ExplicitStack);
    let static_order = EnumerationOptions::default().with_ordering(OrderingStrategy::StaticDegree);

    c.bench_function("max_cliques_sparse_recursive", |b| {
        b.iter(|| black_box(max_cliques_with(&sparse, &recursive)));
    });

    c.bench_function("max_cliques_planted_recursive", |b| {
        b.iter(|| black_box(max_cliques_with(&planted, &recursive)));
    });

    c.bench_function("max_cliques_planted_explicit_stack", |b| {
        b.iter(|| black_box(max_cliques_with(&planted, &stacked)));
    });

    c.bench_function("max_cliques_planted_static_degree", |b| {
        b.iter(|| black_box(max_cliques_with(&planted, &static_order)));
    });
}

criterion_group!(benches, enumerate_bench);
criterion_main!(benches);
