//! Reusable grid fixtures.
//!
//! - [`random_grid`]: seeded sampler over fixed probability bands.
//! - [`centre_outbreak`]: all healthy, one infected cell in the middle.
//! - [`isolated_infector`]: one infected cell surrounded by empty space.

use outbreak_core::{Cell, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Percentage bands used by [`random_grid`].
///
/// A roll `r` in `0..100` becomes Healthy if `r < healthy`, Infected if
/// `r < healthy + infected`, and Empty otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBands {
    pub healthy: u8,
    pub infected: u8,
}

/// Crowded map: 60% healthy, 5% infected, 35% empty.
pub const DENSE_BANDS: CellBands = CellBands {
    healthy: 60,
    infected: 5,
};

/// Sparse map: 10% healthy, 10% infected, 80% empty.
pub const SPARSE_BANDS: CellBands = CellBands {
    healthy: 10,
    infected: 10,
};

impl CellBands {
    fn sample(&self, roll: u8) -> Cell {
        if roll < self.healthy {
            Cell::Healthy
        } else if roll < self.healthy.saturating_add(self.infected) {
            Cell::Infected
        } else {
            Cell::Empty
        }
    }
}

/// Sample a `size x size` grid from `bands` with a ChaCha8 RNG seeded
/// from `seed`. Same seed, same grid.
///
/// # Panics
///
/// Panics if `size == 0`.
pub fn random_grid(size: usize, seed: u64, bands: CellBands) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells: Vec<Cell> = (0..size * size)
        .map(|_| bands.sample(rng.random_range(0..100u8)))
        .collect();
    Grid::from_cells(size, cells).expect("fixture size must be non-zero")
}

/// All healthy except the centre cell, which is infected.
///
/// # Panics
///
/// Panics if `size == 0`.
pub fn centre_outbreak(size: usize) -> Grid {
    let mut g = Grid::new(size, Cell::Healthy).expect("fixture size must be non-zero");
    let mid = size / 2;
    g.set(mid, mid, Cell::Infected).expect("centre is always in bounds");
    g
}

/// All empty except the centre cell, which is infected.
///
/// # Panics
///
/// Panics if `size == 0`.
pub fn isolated_infector(size: usize) -> Grid {
    let mut g = Grid::new(size, Cell::Empty).expect("fixture size must be non-zero");
    let mid = size / 2;
    g.set(mid, mid, Cell::Infected).expect("centre is always in bounds");
    g
}
