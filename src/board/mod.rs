//! Board representation for omok

pub mod board;


use std::fmt;
use std::str::FromStr;

use crate::error::OmokError;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Smallest board that can still hold five in a row
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest board the front ends accept (labels stay two digits wide)
pub const MAX_BOARD_SIZE: usize = 99;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Single-character marker used in text output
    #[inline]
    pub fn marker(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

impl FromStr for Stone {
    type Err = OmokError;

    /// Parses a player marker. Only `B` and `W` (either case) name a stone;
    /// the empty marker is not something a player can place.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" | "b" => Ok(Stone::Black),
            "W" | "w" => Ok(Stone::White),
            _ => Err(OmokError::InvalidStone(s.to_string())),
        }
    }
}

/// Position on the board.
///
/// Coordinates are signed so that negative input can be represented and
/// rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells along direction `(dr, dc)`.
    /// `None` when the result does not fit in `i32`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, distance: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(dr.checked_mul(distance)?)?,
            col: self.col.checked_add(dc.checked_mul(distance)?)?,
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
