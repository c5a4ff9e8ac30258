//! The three-state cell alphabet.

use std::fmt;

/// State of a single grid cell.
///
/// Transitions are one-directional: `Empty` never changes, `Infected`
/// never reverts, and `Healthy` may only become `Infected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    /// Unoccupied position (`.`).
    #[default]
    Empty,
    /// Healthy occupant (`H`).
    Healthy,
    /// Infected occupant (`Z`).
    Infected,
}

impl Cell {
    /// Decode a grid symbol. Case-insensitive for `H` and `Z`.
    ///
    /// Returns `None` for every byte outside the cell alphabet; the text
    /// decoder relies on this to skip separators.
    pub fn from_symbol(byte: u8) -> Option<Self> {
        match byte {
            b'H' | b'h' => Some(Self::Healthy),
            b'Z' | b'z' => Some(Self::Infected),
            b'.' => Some(Self::Empty),
            _ => None,
        }
    }

    /// Canonical (uppercase) symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Healthy => 'H',
            Self::Infected => 'Z',
        }
    }

    /// `true` for [`Cell::Healthy`].
    pub fn is_healthy(self) -> bool {
        self == Self::Healthy
    }

    /// `true` for [`Cell::Infected`].
    pub fn is_infected(self) -> bool {
        self == Self::Infected
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
