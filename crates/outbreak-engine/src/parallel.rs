//! Data-parallel execution of the infection rule over a fixed worker pool.
//!
//! Rows are statically partitioned into contiguous blocks of
//! `ceil(N / workers)` rows, so there are never more blocks than workers.
//! A day runs as three fork-join regions on the pool:
//!
//! ```text
//! clear  ──barrier──▶  mark  ──barrier──▶  build
//! ```
//!
//! Each region spawns exactly one scoped task per block and returns only
//! after every task has finished, which is the barrier. Block boundaries
//! never change; the pool only decides which idle thread picks up a block.
//! During *build* each block writes a disjoint slice of `next`; during
//! *mark* blocks may set flags in neighbouring blocks, which is why the
//! mark buffer is atomic.

use std::sync::atomic::Ordering;

use outbreak_core::Grid;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::ConfigError;
use crate::engine::TransitionEngine;
use crate::marks::InfectionMarks;
use crate::rule;

/// Runs the clear, mark and build phases as parallel loops over row blocks.
pub struct ParallelEngine {
    pool: ThreadPool,
    workers: usize,
}

impl ParallelEngine {
    /// Create an engine backed by a dedicated pool of `workers` threads.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkerCount`] for zero workers and
    /// [`ConfigError::ThreadPool`] if the pool threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::InvalidWorkerCount { value: workers });
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("outbreak-worker-{i}"))
            .build()
            .map_err(|e| ConfigError::ThreadPool {
                reason: e.to_string(),
            })?;
        Ok(Self { pool, workers })
    }

    /// Rows per static block for a grid of side `size`.
    pub fn block_rows(&self, size: usize) -> usize {
        size.div_ceil(self.workers).max(1)
    }

    /// Number of row blocks for a grid of side `size`; never exceeds the
    /// worker count.
    pub fn block_count(&self, size: usize) -> usize {
        size.div_ceil(self.block_rows(size))
    }
}

impl TransitionEngine for ParallelEngine {
    fn name(&self) -> &str {
        "parallel"
    }

    fn worker_count(&self) -> usize {
        self.workers
    }

    fn step(&self, prev: &Grid, next: &mut Grid, marks: &mut InfectionMarks) {
        assert_eq!(prev.size(), next.size(), "generation size mismatch");
        assert_eq!(marks.len(), prev.cell_count(), "mark buffer size mismatch");
        let size = prev.size();
        let block_rows = self.block_rows(size);
        let block_cells = block_rows * size;
        let block_count = self.block_count(size);
        let marks: &InfectionMarks = marks;

        // Clear.
        self.pool.scope(|s| {
            for block in marks.flags().chunks(block_cells) {
                s.spawn(move |_| {
                    for flag in block {
                        flag.store(false, Ordering::Relaxed);
                    }
                });
            }
        });

        // Mark.
        self.pool.scope(|s| {
            for block in 0..block_count {
                s.spawn(move |_| {
                    let start = block * block_rows;
                    let end = (start + block_rows).min(size);
                    for row in start..end {
                        rule::mark_row(prev, row, marks);
                    }
                });
            }
        });

        // Build.
        self.pool.scope(|s| {
            for (block, out) in next.cells_mut().chunks_mut(block_cells).enumerate() {
                s.spawn(move |_| {
                    let first_row = block * block_rows;
                    for (i, row_out) in out.chunks_exact_mut(size).enumerate() {
                        rule::build_row(prev, marks, first_row + i, row_out);
                    }
                });
            }
        });
    }
}

impl std::fmt::Debug for ParallelEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelEngine")
            .field("workers", &self.workers)
            .finish()
    }
}
