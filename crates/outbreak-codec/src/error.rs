//! Error types for reading and writing grid maps.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while decoding or encoding a grid map.
#[derive(Debug)]
pub enum CodecError {
    /// The header is missing or does not start with two integers.
    MalformedHeader {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A header dimension is not positive, or `N * N` overflows.
    InvalidDimension {
        /// Declared side length `N`.
        rows: i64,
        /// Declared second dimension `M`.
        cols: i64,
    },
    /// The input ended before `N * N` cell symbols were found.
    MalformedGrid {
        /// Cells required by the header.
        expected: usize,
        /// Cells actually found.
        found: usize,
    },
    /// The input file could not be opened or read.
    InputUnreadable {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The output file could not be created or written.
    OutputUnwritable {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// An I/O error on a caller-supplied stream.
    Io(io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedHeader { detail } => write!(f, "malformed header: {detail}"),
            Self::InvalidDimension { rows, cols } => {
                write!(f, "invalid dimensions {rows} x {cols}: both must be positive")
            }
            Self::MalformedGrid { expected, found } => {
                write!(f, "malformed grid: expected {expected} cells, found {found}")
            }
            Self::InputUnreadable { path, source } => {
                write!(f, "cannot read input '{}': {source}", path.display())
            }
            Self::OutputUnwritable { path, source } => {
                write!(f, "cannot write output '{}': {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputUnreadable { source, .. } | Self::OutputUnwritable { source, .. } => {
                Some(source)
            }
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
