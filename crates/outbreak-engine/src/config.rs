//! Run configuration, validation, and error types.
//!
//! [`SimConfig`] is the builder-input for a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks structural invariants before
//! any worker pool is created.

use std::error::Error;
use std::fmt;

// ── Strategy ───────────────────────────────────────────────────────

/// Execution strategy for the transition engine.
///
/// Both strategies produce bit-identical generations; the choice only
/// affects wall-clock latency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Single thread, plain nested loops.
    Sequential,
    /// Rows split into contiguous blocks across a fixed worker pool.
    #[default]
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Configuration for a single simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of days to simulate. Zero leaves the grid unchanged.
    pub days: u64,
    /// Which engine executes each day. Default: [`Strategy::Parallel`].
    pub strategy: Strategy,
    /// Worker threads for [`Strategy::Parallel`]. `None` = auto-detect
    /// (`available_parallelism`). Ignored by [`Strategy::Sequential`].
    pub worker_count: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: 0,
            strategy: Strategy::Parallel,
            worker_count: None,
        }
    }
}

impl SimConfig {
    /// Upper bound applied to explicit worker counts.
    pub const MAX_WORKERS: usize = 1024;

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkerCount`] if `worker_count` is
    /// `Some(0)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == Some(0) {
            return Err(ConfigError::InvalidWorkerCount { value: 0 });
        }
        Ok(())
    }

    /// Resolve the actual worker count for this configuration.
    ///
    /// Sequential runs always use one worker. Explicit values are clamped
    /// to `[1, MAX_WORKERS]`; `None` uses the platform-reported available
    /// parallelism, falling back to 4 when it cannot be queried.
    pub fn resolved_worker_count(&self) -> usize {
        if self.strategy == Strategy::Sequential {
            return 1;
        }
        match self.worker_count {
            Some(n) => n.clamp(1, Self::MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`] or building its engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Worker count must be at least 1.
    InvalidWorkerCount {
        /// The rejected value.
        value: usize,
    },
    /// The worker pool could not be constructed.
    ThreadPool {
        /// Description from the pool builder.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkerCount { value } => {
                write!(f, "worker count must be at least 1, got {value}")
            }
            Self::ThreadPool { reason } => write!(f, "worker pool build failed: {reason}"),
        }
    }
}

impl Error for ConfigError {}
