//! Test utilities and fixtures for Outbreak development.
//!
//! Provides seeded random grids ([`random_grid`]), hand-written scenario
//! grids, and [`proptest`] strategies. Randomness always comes from an
//! explicit [`ChaCha8Rng`](rand_chacha::ChaCha8Rng) seeded by the caller,
//! so every fixture is reproducible.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{
    centre_outbreak, isolated_infector, random_grid, CellBands, DENSE_BANDS, SPARSE_BANDS,
};
pub use strategies::{arb_grid, arb_grid_with_size};
