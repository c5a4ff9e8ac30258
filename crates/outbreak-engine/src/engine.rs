//! The [`TransitionEngine`] trait and engine construction.

use outbreak_core::Grid;
use tracing::debug;

use crate::config::{ConfigError, SimConfig, Strategy};
use crate::marks::InfectionMarks;
use crate::parallel::ParallelEngine;
use crate::sequential::SequentialEngine;

/// Maps one generation to the next.
///
/// # Contract
///
/// - `step()` reads only `prev` and writes every cell of `next`.
/// - `marks` is cleared by `step()` before use; its contents on entry are
///   irrelevant and on exit describe the conversions of that day.
/// - Implementations MUST be deterministic and MUST agree with each other
///   cell for cell; they differ only in scheduling.
/// - `prev`, `next` and `marks` must describe the same `N x N` grid.
///
/// # Object safety
///
/// This trait is object-safe; [`Simulation`](crate::Simulation) stores
/// its engine as `Box<dyn TransitionEngine>`.
pub trait TransitionEngine: Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Number of worker threads this engine uses per phase.
    fn worker_count(&self) -> usize;

    /// Execute one day: clear `marks`, mark from `prev`, build `next`.
    fn step(&self, prev: &Grid, next: &mut Grid, marks: &mut InfectionMarks);
}

/// Build the engine selected by `config`.
///
/// # Errors
///
/// Returns [`ConfigError`] if the configuration is invalid or the worker
/// pool cannot be created.
pub fn build_engine(config: &SimConfig) -> Result<Box<dyn TransitionEngine>, ConfigError> {
    config.validate()?;
    let engine: Box<dyn TransitionEngine> = match config.strategy {
        Strategy::Sequential => Box::new(SequentialEngine::new()),
        Strategy::Parallel => Box::new(ParallelEngine::new(config.resolved_worker_count())?),
    };
    debug!(
        engine = engine.name(),
        workers = engine.worker_count(),
        "transition engine ready"
    );
    Ok(engine)
}
