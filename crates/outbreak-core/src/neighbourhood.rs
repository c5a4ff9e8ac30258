//! Moore (8-connected) neighbourhood without wraparound.
//!
//! The offset table is a compile-time constant, so it can be read from any
//! worker thread without synchronisation. Scan order is significant: the
//! transition rule marks the *first* healthy neighbour it finds.

use smallvec::SmallVec;

/// All 8 offsets as `(d_row, d_col)`: N, S, W, E, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// In-bounds neighbours of a cell, in [`MOORE_OFFSETS`] order.
pub type Neighbours = SmallVec<[(usize, usize); 8]>;

/// Resolve a single axis value. Out-of-range positions are absorbed.
#[inline]
fn resolve_axis(val: usize, delta: isize, len: usize) -> Option<usize> {
    val.checked_add_signed(delta).filter(|&v| v < len)
}

/// Compute the in-bounds Moore neighbours of `(row, col)` on a
/// `size x size` grid.
///
/// Corners yield 3 entries, non-corner edge cells 5, interior cells 8,
/// and the single cell of a 1x1 grid none.
pub fn neighbours(size: usize, row: usize, col: usize) -> Neighbours {
    let mut result = Neighbours::new();
    for (dr, dc) in MOORE_OFFSETS {
        let nr = resolve_axis(row, dr, size);
        let nc = resolve_axis(col, dc, size);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            result.push((nr, nc));
        }
    }
    result
}
