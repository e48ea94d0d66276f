//! Benchmarks for the grid engine (initialization, stepping, population scan).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use toruslife::prelude::*;

fn seeded_engine(size: usize) -> GridEngine {
    let config = GridConfig::new(size, size, 0.3, 10).with_seed(42);
    GridEngine::new(&config).unwrap()
}

fn bench_initialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialization");
    for size in [64, 128, 256] {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let config = GridConfig::new(size, size, 0.3, 10).with_seed(42);
            b.iter(|| GridEngine::new(black_box(&config)).unwrap());
        });
    }
    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 128, 256, 512] {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut engine = seeded_engine(size);
            b.iter(|| engine.step());
        });
    }
    group.finish();
}

fn bench_population_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("population");
    for size in [128, 512] {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let engine = seeded_engine(size);
            b.iter(|| black_box(engine.population()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_initialization, bench_step, bench_population_scan);
criterion_main!(benches);
