//! Grid map decoding.

use std::io::Read;
use std::path::Path;

use outbreak_core::{Cell, Grid};
use tracing::debug;

use crate::error::CodecError;

/// Parsed `N M` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Side length `N`; the grid is `N x N`.
    pub size: usize,
    /// Second declared dimension `M`. Accepted for compatibility with
    /// generators that emit it, never used to shape the grid.
    pub declared_cols: usize,
}

/// Cursor over the raw input bytes.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Read an optionally signed decimal integer. Saturates at the `i64`
    /// range so that oversized values surface as dimension errors.
    fn integer(&mut self, what: &str) -> Result<i64, CodecError> {
        self.skip_whitespace();
        let mut negative = false;
        if let Some(&sign @ (b'+' | b'-')) = self.bytes.get(self.pos) {
            negative = sign == b'-';
            self.pos += 1;
        }
        let start = self.pos;
        let mut value: i64 = 0;
        while let Some(&b) = self.bytes.get(self.pos) {
            if !b.is_ascii_digit() {
                break;
            }
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(b - b'0'));
            self.pos += 1;
        }
        if self.pos == start {
            return Err(CodecError::MalformedHeader {
                detail: format!("expected integer {what} at byte {start}"),
            });
        }
        Ok(if negative { -value } else { value })
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

fn parse_header(cursor: &mut Cursor<'_>) -> Result<Header, CodecError> {
    let rows = cursor.integer("N")?;
    let cols = cursor.integer("M")?;
    let invalid = || CodecError::InvalidDimension { rows, cols };
    if rows <= 0 || cols <= 0 {
        return Err(invalid());
    }
    let size = usize::try_from(rows).map_err(|_| invalid())?;
    let declared_cols = usize::try_from(cols).map_err(|_| invalid())?;
    if size.checked_mul(size).is_none() {
        return Err(invalid());
    }
    Ok(Header {
        size,
        declared_cols,
    })
}

/// Parse only the `N M` header of an in-memory map.
///
/// # Errors
///
/// - [`CodecError::MalformedHeader`] if the input does not start with two integers.
/// - [`CodecError::InvalidDimension`] if either dimension is not positive
///   or `N * N` overflows.
pub fn decode_header(bytes: &[u8]) -> Result<Header, CodecError> {
    parse_header(&mut Cursor::new(bytes))
}

/// Decode a grid from an in-memory map.
///
/// # Errors
///
/// - [`CodecError::MalformedHeader`] if the input does not start with two integers.
/// - [`CodecError::InvalidDimension`] if either dimension is not positive.
/// - [`CodecError::MalformedGrid`] if fewer than `N * N` cells follow.
pub fn decode_bytes(bytes: &[u8]) -> Result<Grid, CodecError> {
    let mut cursor = Cursor::new(bytes);
    let header = parse_header(&mut cursor)?;
    if header.declared_cols != header.size {
        debug!(
            size = header.size,
            declared_cols = header.declared_cols,
            "ignoring second header dimension"
        );
    }

    let expected = header.size * header.size;
    let body = cursor.rest();
    let mut cells = Vec::with_capacity(expected.min(body.len()));
    cells.extend(
        body.iter()
            .filter_map(|&b| Cell::from_symbol(b))
            .take(expected),
    );
    if cells.len() != expected {
        return Err(CodecError::MalformedGrid {
            expected,
            found: cells.len(),
        });
    }

    Grid::from_cells(header.size, cells).map_err(|e| CodecError::MalformedHeader {
        detail: e.to_string(),
    })
}

/// Decode a grid from any reader, consuming it to the end.
pub fn decode<R: Read>(mut reader: R) -> Result<Grid, CodecError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode_bytes(&buf)
}

/// Read and decode a grid map file.
///
/// # Errors
///
/// Returns [`CodecError::InputUnreadable`] if the file cannot be read,
/// otherwise the errors of [`decode_bytes`].
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, CodecError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CodecError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded map");
    decode_bytes(&bytes)
}
