//! Square grid holding one generation of cells.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::neighbourhood::{self, Neighbours};

/// Per-state cell counts of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Census {
    /// Number of [`Cell::Empty`] cells.
    pub empty: usize,
    /// Number of [`Cell::Healthy`] cells.
    pub healthy: usize,
    /// Number of [`Cell::Infected`] cells.
    pub infected: usize,
}

impl Census {
    /// Sum of all three counts.
    pub fn total(&self) -> usize {
        self.empty + self.healthy + self.infected
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "healthy={} infected={} empty={}",
            self.healthy, self.infected, self.empty
        )
    }
}

/// An `N x N` matrix of [`Cell`]s stored row-major.
///
/// The side length is fixed at construction; no method changes it. Rows
/// are exposed as contiguous slices so parallel strategies can split the
/// backing storage into disjoint row blocks.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size x size` grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for `size == 0` and
    /// `Err(GridError::SizeOverflow)` if `size * size` overflows.
    pub fn new(size: usize, fill: Cell) -> Result<Self, GridError> {
        let count = Self::checked_cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![fill; count],
        })
    }

    /// Wrap an existing row-major cell vector.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let expected = Self::checked_cell_count(size)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a grid from one string per row, e.g. `["H Z", ". H"]`.
    ///
    /// Bytes outside the cell alphabet are skipped, so both `"HZ."` and
    /// `"H Z ."` describe the same row. The number of rows sets the side
    /// length and every row must contain exactly that many cells.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let size = rows.len();
        let count = Self::checked_cell_count(size)?;
        let mut cells = Vec::with_capacity(count);
        for (r, line) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.bytes().filter_map(Cell::from_symbol));
            let found = cells.len() - before;
            if found != size {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: size,
                    found,
                });
            }
        }
        Ok(Self { size, cells })
    }

    fn checked_cell_count(size: usize) -> Result<usize, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        size.checked_mul(size).ok_or(GridError::SizeOverflow { size })
    }

    /// Side length `N`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`N * N`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.size + col] = cell;
        Ok(())
    }

    /// Panicking lookup for hot loops. Use [`cell_at`](Self::cell_at) for a
    /// `Result`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for {n}x{n} grid",
            n = self.size
        );
        self.cells[row * self.size + col]
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    /// In-bounds Moore neighbours of `(row, col)`.
    pub fn neighbours(&self, row: usize, col: usize) -> Neighbours {
        neighbourhood::neighbours(self.size, row, col)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major view of all cells. The length cannot change.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.size)
    }

    /// Count cells per state.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell {
                Cell::Empty => census.empty += 1,
                Cell::Healthy => census.healthy += 1,
                Cell::Infected => census.infected += 1,
            }
        }
        census
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({}x{})", self.size, self.size)?;
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
