//! The two-phase infection rule, shared by every execution strategy.
//!
//! **Mark**: each cell infected in the previous generation scans its
//! neighbours in [`MOORE_OFFSETS`](outbreak_core::MOORE_OFFSETS) order and
//! marks the first healthy one; its scan stops there. An infector therefore
//! marks at most one target per day, though several infectors may mark the
//! same target.
//!
//! **Build**: each cell of the next generation depends only on the same
//! cell of the previous generation and its mark. Cells marked during a
//! day do not themselves infect until the following day.
//!
//! Strategies differ only in how they partition rows across threads; they
//! call these row kernels unchanged, which is what keeps their outputs
//! bit-identical.

use outbreak_core::{Cell, Grid};

use crate::marks::InfectionMarks;

/// First healthy neighbour of `(row, col)` in scan order, if any.
#[inline]
pub fn first_healthy_neighbour(prev: &Grid, row: usize, col: usize) -> Option<(usize, usize)> {
    prev.neighbours(row, col)
        .into_iter()
        .find(|&(r, c)| prev.get(r, c).is_healthy())
}

/// Next state of a cell given its previous state and mark.
#[inline]
pub fn next_cell(previous: Cell, marked: bool) -> Cell {
    match previous {
        Cell::Infected => Cell::Infected,
        Cell::Healthy if marked => Cell::Infected,
        Cell::Healthy => Cell::Healthy,
        Cell::Empty => Cell::Empty,
    }
}

/// Mark phase for a single row of infectors.
///
/// Targets may lie in the rows above or below, so marks cross row-block
/// boundaries; [`InfectionMarks::mark`] is atomic for that reason.
pub fn mark_row(prev: &Grid, row: usize, marks: &InfectionMarks) {
    let size = prev.size();
    for (col, cell) in prev.row(row).iter().enumerate() {
        if !cell.is_infected() {
            continue;
        }
        if let Some((r, c)) = first_healthy_neighbour(prev, row, col) {
            marks.mark(r * size + c);
        }
    }
}

/// Build phase for a single row. `out` is that row of the next generation.
pub fn build_row(prev: &Grid, marks: &InfectionMarks, row: usize, out: &mut [Cell]) {
    let size = prev.size();
    debug_assert_eq!(out.len(), size);
    let base = row * size;
    for (col, (slot, &previous)) in out.iter_mut().zip(prev.row(row)).enumerate() {
        *slot = next_cell(previous, marks.is_marked(base + col));
    }
}
