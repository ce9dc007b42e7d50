//! Command-line configuration

use clap::Parser;

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::OmokError;
use crate::game::OmokGame;

/// Errors found while validating a [`GameConfig`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be at least {min}, got {0}", min = MIN_BOARD_SIZE)]
    BoardTooSmall(usize),

    #[error("board size must be at most {max}, got {0}", max = MAX_BOARD_SIZE)]
    BoardTooLarge(usize),

    #[error("player name for {0} must not be empty")]
    EmptyName(&'static str),
}

/// Omok - five in a row for two players
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "omok")]
#[command(about = "Two-player five-in-a-row on a square board", long_about = None)]
#[command(version)]
pub struct GameConfig {
    /// Board width and height
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Name of the player using black stones (moves first)
    #[arg(long, default_value = "Black")]
    pub black_name: String,

    /// Name of the player using white stones
    #[arg(long, default_value = "White")]
    pub white_name: String,

    /// Open the graphical board instead of the text prompt
    #[arg(long)]
    pub gui: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            black_name: "Black".to_string(),
            white_name: "White".to_string(),
            gui: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.size));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.size));
        }
        if self.black_name.trim().is_empty() {
            return Err(ConfigError::EmptyName("black"));
        }
        if self.white_name.trim().is_empty() {
            return Err(ConfigError::EmptyName("white"));
        }
        Ok(())
    }

    /// Fresh game with the configured size and names
    pub fn new_game(&self) -> Result<OmokGame, OmokError> {
        OmokGame::with_players(self.size, self.black_name.as_str(), self.white_name.as_str())
    }
}
