//! Criterion benchmarks comparing the sequential engine with the worker
//! pool at increasing worker counts.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use outbreak_bench::{reference_profile, stress_profile, worker_counts};
use outbreak_core::Grid;
use outbreak_engine::{
    InfectionMarks, ParallelEngine, SequentialEngine, SimConfig, Simulation, Strategy,
    TransitionEngine,
};

fn host_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

fn bench_step(c: &mut Criterion, name: &str, grid: &Grid) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements(grid.cell_count() as u64));

    let mut next = grid.clone();
    let mut marks = InfectionMarks::new(grid.cell_count());

    let seq = SequentialEngine::new();
    group.bench_function("sequential", |b| {
        b.iter(|| {
            seq.step(grid, &mut next, &mut marks);
            black_box(&next);
        });
    });

    for workers in worker_counts(host_workers()) {
        let engine = ParallelEngine::new(workers).unwrap();
        group.bench_with_input(BenchmarkId::new("parallel", workers), &workers, |b, _| {
            b.iter(|| {
                engine.step(grid, &mut next, &mut marks);
                black_box(&next);
            });
        });
    }
    group.finish();
}

fn bench_step_10k(c: &mut Criterion) {
    bench_step(c, "step_10k", &reference_profile(42));
}

fn bench_step_1m(c: &mut Criterion) {
    bench_step(c, "step_1m", &stress_profile(42));
}

/// Full 100-day runs including the double-buffer swap.
fn bench_100_days_10k(c: &mut Criterion) {
    let grid = reference_profile(7);
    let mut group = c.benchmark_group("100_days_10k");
    for (label, strategy) in [
        ("sequential", Strategy::Sequential),
        ("parallel", Strategy::Parallel),
    ] {
        let config = SimConfig {
            days: 100,
            strategy,
            worker_count: None,
        };
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut sim = Simulation::with_config(grid.clone(), &config).unwrap();
                black_box(sim.run());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step_10k, bench_step_1m, bench_100_days_10k);
criterion_main!(benches);
