//! Benchmark profiles and scaling metrics for the Outbreak infection automaton.
//!
//! - [`reference_profile`]: 100x100 crowded grid (10K cells)
//! - [`stress_profile`]: 1000x1000 crowded grid (1M cells)
//! - [`worker_counts`]: powers of two up to a ceiling, plus the ceiling
//! - [`ScalingMetrics`]: speedup and efficiency of a parallel run against
//!   the sequential baseline

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;
use std::time::Duration;

use outbreak_core::Grid;
use outbreak_engine::{SimConfig, Simulation, Strategy};
use outbreak_test_utils::{random_grid, DENSE_BANDS};

/// Build the reference benchmark grid: 100x100 (10K cells), 60% healthy,
/// 5% infected.
pub fn reference_profile(seed: u64) -> Grid {
    random_grid(100, seed, DENSE_BANDS)
}

/// Build the stress benchmark grid: 1000x1000 (1M cells), same bands as
/// [`reference_profile`].
pub fn stress_profile(seed: u64) -> Grid {
    random_grid(1000, seed, DENSE_BANDS)
}

/// Worker counts to sweep: 1, 2, 4, ... up to `max`, with `max` itself
/// appended when it is not a power of two. Empty for `max == 0`.
pub fn worker_counts(max: usize) -> Vec<usize> {
    let mut counts: Vec<usize> = std::iter::successors(Some(1usize), |p| p.checked_mul(2))
        .take_while(|&p| p <= max)
        .collect();
    if max > 0 && counts.last() != Some(&max) {
        counts.push(max);
    }
    counts
}

/// Run `days` days of `grid` under `strategy` and return the day-loop time.
///
/// # Panics
///
/// Panics if `workers == Some(0)` or the worker pool cannot be built.
pub fn time_run(grid: &Grid, days: u64, strategy: Strategy, workers: Option<usize>) -> Duration {
    let config = SimConfig {
        days,
        strategy,
        worker_count: workers,
    };
    let mut sim = Simulation::with_config(grid.clone(), &config).unwrap();
    sim.run().elapsed
}

/// Parallel performance relative to the sequential baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingMetrics {
    /// Worker threads of the parallel run.
    pub workers: usize,
    /// `serial / parallel`. Zero if the parallel time is zero.
    pub speedup: f64,
    /// `speedup / workers` as a percentage.
    pub efficiency: f64,
    /// Wall time saved, as a percentage of the serial time.
    pub time_reduction: f64,
}

impl ScalingMetrics {
    /// Compare a parallel timing against a serial one.
    pub fn compute(serial: Duration, parallel: Duration, workers: usize) -> Self {
        let s = serial.as_secs_f64();
        let p = parallel.as_secs_f64();
        let speedup = if p > 0.0 { s / p } else { 0.0 };
        let efficiency = if workers > 0 {
            speedup / workers as f64 * 100.0
        } else {
            0.0
        };
        let time_reduction = if s > 0.0 { (s - p) / s * 100.0 } else { 0.0 };
        Self {
            workers,
            speedup,
            efficiency,
            time_reduction,
        }
    }
}

impl fmt::Display for ScalingMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} workers  speedup {:>6.2}x  efficiency {:>6.1}%  reduction {:>6.1}%",
            self.workers, self.speedup, self.efficiency, self.time_reduction
        )
    }
}
