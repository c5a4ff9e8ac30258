//! Error types for grid construction and indexing.

use std::fmt;

/// Errors arising from grid construction or cell queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The grid side is too large for `size * size` to fit in `usize`.
    SizeOverflow {
        /// The requested side length.
        size: usize,
    },
    /// The supplied cell vector does not hold `size * size` cells.
    CellCountMismatch {
        /// Number of cells required by the side length.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
    /// A row of text passed to [`Grid::from_rows`](crate::Grid::from_rows)
    /// does not hold exactly `size` cell symbols.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Cells expected in the row.
        expected: usize,
        /// Cells found in the row.
        found: usize,
    },
    /// A coordinate is outside `[0, size) x [0, size)`.
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid side length.
        size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::SizeOverflow { size } => {
                write!(f, "grid side {size} overflows the cell count")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::OutOfBounds { row, col, size } => {
                write!(f, "cell ({row}, {col}) out of bounds: [0, {size}) x [0, {size})")
            }
        }
    }
}

impl std::error::Error for GridError {}
