//! Run-level timing and outcome report.
//!
//! [`RunReport`] is produced by [`Simulation::run()`](crate::Simulation::run)
//! once the day loop has finished.

use std::time::Duration;

use outbreak_core::Census;

/// Timing and outcome of a completed simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Days simulated.
    pub days: u64,
    /// Wall-clock time spent in the day loop, measured with a monotonic clock.
    pub elapsed: Duration,
    /// Worker threads used by the engine.
    pub worker_count: usize,
    /// Engine name (`"sequential"` or `"parallel"`).
    pub engine: String,
    /// Cell counts of the final generation.
    pub census: Census,
}

impl RunReport {
    /// Elapsed loop time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Average time per simulated day, or zero for a zero-day run.
    pub fn per_day(&self) -> Duration {
        match u32::try_from(self.days) {
            Ok(0) => Duration::ZERO,
            Ok(days) => self.elapsed / days,
            Err(_) => Duration::from_secs_f64(self.elapsed_secs() / self.days as f64),
        }
    }
}
