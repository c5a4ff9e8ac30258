//! Single-threaded execution of the infection rule.

use outbreak_core::Grid;

use crate::engine::TransitionEngine;
use crate::marks::InfectionMarks;
use crate::rule;

/// Runs every phase as plain nested loops on the calling thread.
///
/// This is the reference strategy: [`ParallelEngine`](crate::ParallelEngine)
/// is required to match it exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialEngine;

impl SequentialEngine {
    /// Create a sequential engine.
    pub fn new() -> Self {
        Self
    }
}

impl TransitionEngine for SequentialEngine {
    fn name(&self) -> &str {
        "sequential"
    }

    fn worker_count(&self) -> usize {
        1
    }

    fn step(&self, prev: &Grid, next: &mut Grid, marks: &mut InfectionMarks) {
        assert_eq!(prev.size(), next.size(), "generation size mismatch");
        assert_eq!(marks.len(), prev.cell_count(), "mark buffer size mismatch");
        let size = prev.size();

        marks.clear();

        for row in 0..size {
            rule::mark_row(prev, row, marks);
        }

        for (row, out) in next.cells_mut().chunks_exact_mut(size).enumerate() {
            rule::build_row(prev, marks, row, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outbreak_core::Cell;

    fn step_once(prev: &Grid) -> Grid {
        let mut next = Grid::new(prev.size(), Cell::Empty).unwrap();
        let mut marks = InfectionMarks::new(prev.cell_count());
        SequentialEngine::new().step(prev, &mut next, &mut marks);
        next
    }

    #[test]
    fn centre_infects_north_only() {
        let g = Grid::from_rows(&["HHH", "HZH", "HHH"]).unwrap();
        let expected = Grid::from_rows(&["HZH", "HZH", "HHH"]).unwrap();
        assert_eq!(step_once(&g), expected);
    }

    #[test]
    fn isolated_infector_is_inert() {
        let g = Grid::from_rows(&["...", ".Z.", "..."]).unwrap();
        assert_eq!(step_once(&g), g);
    }

    #[test]
    fn new_infections_do_not_spread_same_day() {
        // (0,0) infects (1,0); (1,0) must not infect (2,0) on the same day.
        let g = Grid::from_rows(&["Z..", "H..", "H.."]).unwrap();
        let day1 = step_once(&g);
        assert_eq!(day1, Grid::from_rows(&["Z..", "Z..", "H.."]).unwrap());
        let day2 = step_once(&day1);
        assert_eq!(day2, Grid::from_rows(&["Z..", "Z..", "Z.."]).unwrap());
    }

    #[test]
    fn stale_marks_are_cleared() {
        let g = Grid::from_rows(&["HH", "HH"]).unwrap();
        let mut next = Grid::new(2, Cell::Empty).unwrap();
        let mut marks = InfectionMarks::new(4);
        marks.mark(0);
        marks.mark(3);
        SequentialEngine::new().step(&g, &mut next, &mut marks);
        assert_eq!(next, g);
        assert_eq!(marks.marked_count(), 0);
    }

    #[test]
    fn corner_infector_reads_only_in_bounds() {
        let g = Grid::from_rows(&["ZH", "HH"]).unwrap();
        // Corner (0,0): N and W absorbed, S is first.
        assert_eq!(step_once(&g), Grid::from_rows(&["ZH", "ZH"]).unwrap());
    }
}
