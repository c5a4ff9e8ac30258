//! Plain-text map format for Outbreak grids.
//!
//! # Input
//!
//! ```text
//! 3 3
//! H H .
//! h Z z
//! . . H
//! ```
//!
//! A header of two positive integers `N M` is followed by a stream of
//! cell symbols (`H`, `Z`, `.`, case-insensitive). Every other byte is
//! skipped, so row layout and separators are free-form. Exactly `N * N`
//! cells are read; anything after them is ignored. `M` is validated but
//! otherwise unused: grids are always `N x N`.
//!
//! # Output
//!
//! Uppercase symbols, one row per line, cells separated by one space.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::CodecError;
pub use reader::{decode, decode_bytes, decode_header, load_grid, Header};
pub use writer::{encode, save_grid};
