use peak_core::RngHandle;
use peak_graph::{gen_gnp, gen_planted_cliques};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn ordering_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let sparse = gen_gnp(2_000, 0.003, &mut rng).unwrap();
    let planted = gen_planted_cliques(1_000, &[12, 10, 8], 0.01, &mut rng).unwrap();

    c.bench_function("degeneracy_ordering_sparse", |b| {
        b.iter(|| black_box(sparse.degeneracy_ordering()));
    });

    c.bench_function("degree_ordering_sparse", |b| {
        b.iter(|| black_box(sparse.degree_ordering()));
    });

    c.bench_function("degeneracy_ordering_planted", |b| {
        b.iter(|| black_box(planted.degeneracy_ordering()));
    });
}

criterion_group!(benches, ordering_bench);
criterion_main!(benches);
