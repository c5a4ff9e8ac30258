//! Day-loop orchestration with double-buffered generations.
//!
//! [`Simulation`] owns two grids, `current` and `next`, plus the mark
//! buffer. Each day the engine reads `current` and writes `next`; the two
//! owned grids are then exchanged with [`std::mem::swap`], so no cell is
//! ever copied between generations.
//!
//! # Lifecycle
//!
//! ```text
//! Initializing ──step_day()/run()──▶ Running ──last day──▶ Done
//!       └────────────── days == 0 ─────────────────────────▲
//! ```
//!
//! The loop always runs exactly `days` steps; it does not stop early when
//! the grid reaches a fixed point.

use std::time::Instant;

use outbreak_core::Grid;
use tracing::{debug, info, trace};

use crate::config::{ConfigError, SimConfig};
use crate::engine::{build_engine, TransitionEngine};
use crate::marks::InfectionMarks;
use crate::metrics::RunReport;

/// Orchestrator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Buffers allocated, no day executed yet.
    Initializing,
    /// At least one day executed, more remain.
    Running,
    /// All `days` executed; `current` holds the final generation.
    Done,
}

/// Drives `days` repetitions of the transition engine over a grid.
pub struct Simulation {
    current: Grid,
    next: Grid,
    marks: InfectionMarks,
    engine: Box<dyn TransitionEngine>,
    days: u64,
    day: u64,
    phase: Phase,
}

impl Simulation {
    /// Set up a simulation of `days` days starting from `initial`.
    ///
    /// Allocates the second generation buffer and the mark buffer. No
    /// simulation work happens until [`step_day()`](Self::step_day) or
    /// [`run()`](Self::run).
    pub fn new(initial: Grid, engine: Box<dyn TransitionEngine>, days: u64) -> Self {
        let next = initial.clone();
        let marks = InfectionMarks::new(initial.cell_count());
        Self {
            current: initial,
            next,
            marks,
            engine,
            days,
            day: 0,
            phase: Phase::Initializing,
        }
    }

    /// Build the engine described by `config` and set up a simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the engine cannot be built.
    pub fn with_config(initial: Grid, config: &SimConfig) -> Result<Self, ConfigError> {
        let engine = build_engine(config)?;
        Ok(Self::new(initial, engine, config.days))
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Days executed so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Total days this simulation will run.
    pub fn days(&self) -> u64 {
        self.days
    }

    /// The generation currently in the "current" role.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The engine executing each day.
    pub fn engine(&self) -> &dyn TransitionEngine {
        self.engine.as_ref()
    }

    /// Advance by one day.
    ///
    /// Returns `false` without doing any work once all `days` have run.
    pub fn step_day(&mut self) -> bool {
        if self.day >= self.days {
            self.phase = Phase::Done;
            return false;
        }
        self.engine.step(&self.current, &mut self.next, &mut self.marks);
        std::mem::swap(&mut self.current, &mut self.next);
        self.day += 1;
        self.phase = if self.day == self.days {
            Phase::Done
        } else {
            Phase::Running
        };
        trace!(day = self.day, converted = self.marks.marked_count(), "day complete");
        true
    }

    /// Run every remaining day and report elapsed wall time.
    ///
    /// Only the day loop is timed. Calling `run()` on a finished
    /// simulation returns a report with zero elapsed time.
    pub fn run(&mut self) -> RunReport {
        debug!(
            size = self.current.size(),
            days = self.days,
            engine = self.engine.name(),
            workers = self.engine.worker_count(),
            "simulation starting"
        );
        let start = Instant::now();
        while self.step_day() {}
        let elapsed = start.elapsed();

        let report = RunReport {
            days: self.day,
            elapsed,
            worker_count: self.engine.worker_count(),
            engine: self.engine.name().to_string(),
            census: self.current.census(),
        };
        info!(
            days = report.days,
            elapsed_s = report.elapsed_secs(),
            workers = report.worker_count,
            census = %report.census,
            "simulation finished"
        );
        report
    }

    /// Consume the simulation and hand back the final generation.
    pub fn into_grid(self) -> Grid {
        self.current
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("size", &self.current.size())
            .field("day", &self.day)
            .field("days", &self.days)
            .field("phase", &self.phase)
            .field("engine", &self.engine.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use crate::sequential::SequentialEngine;

    fn sim(rows: &[&str], days: u64) -> Simulation {
        let g = Grid::from_rows(rows).unwrap();
        Simulation::new(g, Box::new(SequentialEngine::new()), days)
    }

    #[test]
    fn starts_initializing() {
        let s = sim(&["HZ", "HH"], 3);
        assert_eq!(s.phase(), Phase::Initializing);
        assert_eq!(s.day(), 0);
        assert_eq!(s.days(), 3);
        assert_eq!(s.engine().name(), "sequential");
        assert_eq!(s.engine().worker_count(), 1);
    }

    #[test]
    fn zero_days_is_identity() {
        let mut s = sim(&["HZ", ".H"], 0);
        let before = s.current().clone();
        let report = s.run();
        assert_eq!(report.days, 0);
        assert_eq!(s.phase(), Phase::Done);
        assert_eq!(s.into_grid(), before);
    }

    #[test]
    fn phases_advance() {
        let mut s = sim(&["ZHH", "...", "..."], 2);
        assert!(s.step_day());
        assert_eq!(s.phase(), Phase::Running);
        assert!(s.step_day());
        assert_eq!(s.phase(), Phase::Done);
        assert!(!s.step_day());
        assert_eq!(s.day(), 2);
    }

    #[test]
    fn runs_exactly_days_even_at_fixed_point() {
        let mut s = sim(&["ZZ", "ZZ"], 7);
        let report = s.run();
        assert_eq!(report.days, 7);
        assert_eq!(s.day(), 7);
    }

    #[test]
    fn spread_along_a_row() {
        let mut s = sim(&["ZHHH", "....", "....", "...."], 2);
        s.run();
        assert_eq!(
            s.into_grid(),
            Grid::from_rows(&["ZZZH", "....", "....", "...."]).unwrap()
        );
    }

    #[test]
    fn report_carries_census_and_engine() {
        let mut s = sim(&["ZH", "H."], 1);
        let r = s.run();
        assert_eq!(r.engine, "sequential");
        assert_eq!(r.worker_count, 1);
        assert_eq!(r.census.total(), 4);
        // (0,0) marks S first: (1,0).
        assert_eq!(r.census.infected, 2);
    }

    #[test]
    fn with_config_parallel() {
        let g = Grid::from_rows(&["HHH", "HZH", "HHH"]).unwrap();
        let cfg = SimConfig {
            days: 1,
            strategy: Strategy::Parallel,
            worker_count: Some(2),
        };
        let mut s = Simulation::with_config(g, &cfg).unwrap();
        let r = s.run();
        assert_eq!(r.worker_count, 2);
        assert_eq!(
            s.into_grid(),
            Grid::from_rows(&["HZH", "HZH", "HHH"]).unwrap()
        );
    }
}
