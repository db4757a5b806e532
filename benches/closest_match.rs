//! Benchmarks for the distance kernel and both search paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use levmatch::{
    closest_match, closest_match_parallel, distance, ParallelConfig, PooledExecutor, WorkerPool,
};

fn dictionary(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("candidate-term-{:06}", i)).collect()
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("distance/short", |b| {
        b.iter(|| distance(black_box("fasf"), black_box("fair")))
    });
    c.bench_function("distance/sentence", |b| {
        b.iter(|| {
            distance(
                black_box("Need t insertions to match"),
                black_box("Need two insertions to match"),
            )
        })
    });
}

fn bench_sequential(c: &mut Criterion) {
    let dict = dictionary(10_000);
    c.bench_function("closest_match/10k", |b| {
        b.iter(|| closest_match(black_box("candidate-trem-004242"), &dict))
    });
}

fn bench_parallel(c: &mut Criterion) {
    let dict = dictionary(10_000);
    let pool = WorkerPool::with_default_parallelism();

    let mut group = c.benchmark_group("closest_match_parallel/10k");
    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &w| {
            let config = ParallelConfig::with_workers(w);
            b.iter(|| {
                closest_match_parallel(
                    black_box("candidate-trem-004242"),
                    &dict,
                    &config,
                    &PooledExecutor::new(&pool),
                )
                .unwrap()
            })
        });
    }
    group.finish();

    pool.shutdown();
}

criterion_group!(benches, bench_distance, bench_sequential, bench_parallel);
criterion_main!(benches);
