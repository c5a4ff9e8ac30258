//! Grid map encoding.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use outbreak_core::Grid;
use tracing::debug;

use crate::error::CodecError;

/// Write `grid` as uppercase symbols, one row per line, cells separated
/// by a single space. No header is emitted.
pub fn encode<W: Write>(grid: &Grid, mut writer: W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.size() * 2);
    for row in grid.rows() {
        line.clear();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push(cell.symbol());
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write `grid` to it.
///
/// # Errors
///
/// Returns [`CodecError::OutputUnwritable`] if the file cannot be created
/// or any write fails.
pub fn save_grid(grid: &Grid, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let path = path.as_ref();
    let unwritable = |source| CodecError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(unwritable)?;
    encode(grid, BufWriter::new(file)).map_err(unwritable)?;
    debug!(path = %path.display(), size = grid.size(), "saved map");
    Ok(())
}
