//! Core types for the Outbreak infection automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell alphabet, the square [`Grid`] that holds one generation, and the
//! fixed Moore neighbourhood used by the transition engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod neighbourhood;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Census, Grid};
pub use neighbourhood::{neighbours, Neighbours, MOORE_OFFSETS};
