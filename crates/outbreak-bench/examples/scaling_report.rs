//! Strong-scaling report for the parallel engine.
//!
//! Times the stress profile sequentially, then with 1, 2, 4, ... workers up
//! to the host's parallelism, averaging three runs of each.

use std::time::Duration;

use outbreak_bench::{stress_profile, time_run, worker_counts, ScalingMetrics};
use outbreak_engine::Strategy;

const DAYS: u64 = 50;
const RUNS: u32 = 3;

fn mean_time(strategy: Strategy, workers: Option<usize>) -> Duration {
    let grid = stress_profile(42);
    let total: Duration = (0..RUNS)
        .map(|_| time_run(&grid, DAYS, strategy, workers))
        .sum();
    total / RUNS
}

fn main() {
    println!("=== Outbreak Scaling Report ===\n");
    println!("grid 1000x1000, {DAYS} days, mean of {RUNS} runs\n");

    let serial = mean_time(Strategy::Sequential, None);
    println!("sequential  {:.6} s", serial.as_secs_f64());

    let host = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    for workers in worker_counts(host) {
        let parallel = mean_time(Strategy::Parallel, Some(workers));
        let metrics = ScalingMetrics::compute(serial, parallel, workers);
        println!("{metrics}  ({:.6} s)", parallel.as_secs_f64());
    }
}
