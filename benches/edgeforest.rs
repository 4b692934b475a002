use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edgeforest::OrderedForest;

fn make_chain_forest(size: usize) -> OrderedForest<u32> {
    let mut forest = OrderedForest::with_capacity(size + 1);

    for i in 0..size as u32 {
        forest.insert(i, i + 1).unwrap();
    }

    forest
}

fn bench_make_forest(c: &mut Criterion) {
    let mut g = c.benchmark_group("forest creation");

    for size in [10, 100, 1_000] {
        g.bench_with_input(
            BenchmarkId::new("make_chain_forest", size),
            &size,
            |b, size| b.iter(|| black_box(make_chain_forest(*size))),
        );
    }
}

fn bench_cycle_validation(c: &mut Criterion) {
    let mut g = c.benchmark_group("cycle validation");

    for size in [10, 100, 1_000] {
        g.bench_with_input(
            BenchmarkId::new("would_close_cycle", size),
            &size,
            |b, size| {
                let forest = make_chain_forest(*size);
                b.iter(|| black_box(forest.would_close_cycle(black_box(*size as u32), 0)))
            },
        );
    }
}

fn bench_iterate_forest(c: &mut Criterion) {
    let mut g = c.benchmark_group("forest iteration");

    for size in [10, 100, 1_000] {
        g.bench_with_input(BenchmarkId::new("iter", size), &size, |b, size| {
            let forest = make_chain_forest(*size);
            b.iter(|| black_box(forest.iter().count()))
        });
    }
}

criterion_group!(
    benches,
    bench_make_forest,
    bench_cycle_validation,
    bench_iterate_forest
);
criterion_main!(benches);
