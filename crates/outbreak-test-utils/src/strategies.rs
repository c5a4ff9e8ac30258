//! [`proptest`] strategies for arbitrary grids.

use outbreak_core::{Cell, Grid};
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Healthy),
        Just(Cell::Infected),
    ]
}

/// Arbitrary grid with a side length of exactly `size`.
pub fn arb_grid_with_size(size: usize) -> impl Strategy<Value = Grid> {
    prop::collection::vec(arb_cell(), size * size)
        .prop_map(move |cells| Grid::from_cells(size, cells).expect("length matches size"))
}

/// Arbitrary grid with a side length in `1..=max_size`.
pub fn arb_grid(max_size: usize) -> impl Strategy<Value = Grid> {
    (1..=max_size.max(1)).prop_flat_map(arb_grid_with_size)
}
