//! Per-day infection mark buffer.
//!
//! [`InfectionMarks`] records which healthy cells convert during the
//! current step. Entries are [`AtomicBool`]s so that workers scanning
//! different infected cells may mark the same target concurrently. The
//! write is always `true`, so concurrent or repeated marks commute.
//!
//! `Relaxed` ordering is sufficient: every phase ends in a fork-join
//! barrier, which orders the marks before any read in the build phase.

use std::sync::atomic::{AtomicBool, Ordering};

/// Transient `N x N` boolean buffer, cleared at the start of every step.
#[derive(Debug)]
pub struct InfectionMarks {
    flags: Vec<AtomicBool>,
}

impl InfectionMarks {
    /// Allocate an all-false buffer for `cell_count` cells.
    pub fn new(cell_count: usize) -> Self {
        Self {
            flags: (0..cell_count).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// `true` if the buffer has no entries.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Reset every entry to `false` through exclusive access.
    pub fn clear(&mut self) {
        for flag in &mut self.flags {
            *flag.get_mut() = false;
        }
    }

    /// Mark the cell at row-major `index` for conversion.
    ///
    /// Safe to call from many threads at once.
    #[inline]
    pub fn mark(&self, index: usize) {
        self.flags[index].store(true, Ordering::Relaxed);
    }

    /// Whether the cell at row-major `index` is marked.
    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        self.flags[index].load(Ordering::Relaxed)
    }

    /// Shared view of the raw flags, for parallel clearing by row block.
    pub fn flags(&self) -> &[AtomicBool] {
        &self.flags
    }

    /// Number of marked entries.
    pub fn marked_count(&self) -> usize {
        self.flags
            .iter()
            .filter(|f| f.load(Ordering::Relaxed))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_false() {
        let m = InfectionMarks::new(9);
        assert_eq!(m.len(), 9);
        assert_eq!(m.marked_count(), 0);
    }

    #[test]
    fn mark_is_idempotent() {
        let m = InfectionMarks::new(4);
        m.mark(2);
        m.mark(2);
        assert!(m.is_marked(2));
        assert!(!m.is_marked(1));
        assert_eq!(m.marked_count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut m = InfectionMarks::new(4);
        m.mark(0);
        m.mark(3);
        m.clear();
        assert_eq!(m.marked_count(), 0);
    }

    #[test]
    fn concurrent_marks_on_same_cell() {
        let m = InfectionMarks::new(1);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| m.mark(0));
            }
        });
        assert!(m.is_marked(0));
    }
}
