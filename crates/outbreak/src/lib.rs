//! Outbreak: an infection-spread cellular automaton on square grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Outbreak sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use outbreak::prelude::*;
//!
//! let map = b"3 3\nH H H\nH Z H\nH H H\n";
//! let grid = outbreak::codec::decode_bytes(map).unwrap();
//!
//! let config = SimConfig {
//!     days: 1,
//!     strategy: Strategy::Parallel,
//!     worker_count: Some(2),
//! };
//! let mut sim = Simulation::with_config(grid, &config).unwrap();
//! let report = sim.run();
//! assert_eq!(report.worker_count, 2);
//!
//! // The north neighbour is the first healthy cell in scan order.
//! assert_eq!(
//!     sim.into_grid(),
//!     Grid::from_rows(&["H Z H", "H Z H", "H H H"]).unwrap()
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `outbreak-core` | Cells, grids, Moore neighbourhood |
//! | [`engine`] | `outbreak-engine` | Transition rule, engines, day loop |
//! | [`codec`] | `outbreak-codec` | Plain-text map reader and writer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cells, grids, and the Moore neighbourhood (`outbreak-core`).
pub use outbreak_core as grid;

/// Transition rule, sequential and parallel engines, and the
/// [`engine::Simulation`] day loop (`outbreak-engine`).
pub use outbreak_engine as engine;

/// Plain-text map format (`outbreak-codec`).
///
/// [`codec::load_grid`] and [`codec::save_grid`] for files,
/// [`codec::decode`] and [`codec::encode`] for arbitrary streams.
pub use outbreak_codec as codec;

/// Common imports for typical Outbreak usage.
///
/// ```rust
/// use outbreak::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use outbreak_core::{Cell, Census, Grid};

    // Errors
    pub use outbreak_codec::CodecError;
    pub use outbreak_core::GridError;
    pub use outbreak_engine::ConfigError;

    // Engine
    pub use outbreak_engine::{
        build_engine, ParallelEngine, RunReport, SequentialEngine, SimConfig, Simulation,
        Strategy, TransitionEngine,
    };

    // Codec
    pub use outbreak_codec::{load_grid, save_grid};
}
