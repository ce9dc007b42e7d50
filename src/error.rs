//! Error types for the omok core

/// Errors raised by board and game operations.
///
/// Every failure leaves the board and game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OmokError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("invalid stone marker {0:?} (expected B or W)")]
    InvalidStone(String),

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: i32, col: i32 },

    #[error("board size {0} is unsupported (must be at least 5 and addressable)")]
    InvalidBoardSize(usize),

    #[error("the game is already finished")]
    GameAlreadyFinished,
}

pub type Result<T> = std::result::Result<T, OmokError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = OmokError::OutOfBounds { row: -1, col: 3, size: 15 };
        assert_eq!(err.to_string(), "position (-1, 3) is outside the 15x15 board");
    }

    #[test]
    fn test_invalid_stone_display() {
        let err = OmokError::InvalidStone("X".to_string());
        assert_eq!(err.to_string(), "invalid stone marker \"X\" (expected B or W)");
    }

    #[test]
    fn test_board_size_display() {
        assert_eq!(
            OmokError::InvalidBoardSize(4).to_string(),
            "board size 4 is unsupported (must be at least 5 and addressable)"
        );
    }
}
