//! Board structure with bounds-checked placement

use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{OmokError, Result};
use crate::rules::win;

/// Square omok board.
///
/// Cells only ever move from `Empty` to a stone; nothing is removed
/// except by [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells, `size * size` long
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty `size x size` board.
    pub fn new(size: usize) -> Result<Self> {
        // Coordinates are i32, so larger sides could never be addressed
        if size < MIN_BOARD_SIZE || size > i32::MAX as usize {
            return Err(OmokError::InvalidBoardSize(size));
        }
        let cells = size
            .checked_mul(size)
            .ok_or(OmokError::InvalidBoardSize(size))?;
        Ok(Self::empty(size, cells))
    }

    fn empty(size: usize, cells: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; cells],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if both coordinates lie inside the board
    #[inline]
    pub fn is_within_bounds(&self, pos: Pos) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(pos.row as i64)) && (0..size).contains(&(pos.col as i64))
    }

    fn index(&self, pos: Pos) -> Result<usize> {
        if !self.is_within_bounds(pos) {
            return Err(OmokError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        Ok(pos.row as usize * self.size + pos.col as usize)
    }

    /// Stone at `pos`, or `None` off the board. Used by line scans.
    #[inline]
    pub(crate) fn stone_at(&self, pos: Pos) -> Option<Stone> {
        self.index(pos).ok().map(|idx| self.cells[idx])
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> Result<Stone> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx])
    }

    /// Check if position is empty
    pub fn is_cell_empty(&self, pos: Pos) -> Result<bool> {
        Ok(self.get(pos)? == Stone::Empty)
    }

    /// Place a stone.
    ///
    /// Checks bounds, then the stone, then occupancy. The board is left
    /// unchanged on any error.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<()> {
        let idx = self.index(pos)?;
        if stone == Stone::Empty {
            return Err(OmokError::InvalidStone(stone.marker().to_string()));
        }
        if self.cells[idx] != Stone::Empty {
            return Err(OmokError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[idx] = stone;
        Ok(())
    }

    /// Place a stone given by its text marker (`B` or `W`)
    pub fn place_marker(&mut self, pos: Pos, marker: &str) -> Result<()> {
        self.index(pos)?;
        let stone = marker.parse::<Stone>()?;
        self.place(pos, stone)
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Stone::Empty)
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Stone::Empty).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Stone::Empty)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
    }

    /// Occupied cells in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &stone)| stone != Stone::Empty)
            .map(move |(idx, &stone)| (Pos::new((idx / size) as i32, (idx % size) as i32), stone))
    }

    /// Check for five or more contiguous `stone`s through `pos` on any of
    /// the four axes. The cell at `pos` itself is counted as `stone`.
    pub fn has_five_in_a_row(&self, pos: Pos, stone: Stone) -> Result<bool> {
        self.index(pos)?;
        Ok(win::has_five_at_pos(self, pos, stone))
    }

    /// The full run of `stone` through `pos` on the first axis reaching five
    pub fn winning_line(&self, pos: Pos, stone: Stone) -> Result<Option<Vec<Pos>>> {
        self.index(pos)?;
        Ok(win::find_five_line_at_pos(self, pos, stone))
    }

    /// Text rendering with row and column labels
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, " {:2}", col)?;
        }
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "\n{:2} ", row)?;
            let line: Vec<String> = cells.iter().map(|c| c.marker().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
