//! Omok: two-player five-in-a-row
//!
//! Plain five-in-a-row on a square board of any size from 5 up:
//! - Black moves first, turns strictly alternate
//! - Five or more contiguous stones on a row, column or diagonal win
//!   (overlines count)
//! - A full board without a winner is a draw
//!
//! # Architecture
//!
//! - [`board`]: cells, placement and bounds checks
//! - [`rules`]: line counting and five-in-a-row detection
//! - [`game`]: turn order and outcomes
//! - [`console`]: text front end with an injectable input source
//! - [`ui`]: egui hotseat front end
//! - [`config`]: command-line configuration
//!
//! # Quick Start
//!
//! ```
//! use omok::{MoveOutcome, OmokGame, Pos};
//!
//! let mut game = OmokGame::new(15).unwrap();
//! for col in 0..4 {
//!     assert_eq!(game.play_turn(Pos::new(7, col)), Ok(MoveOutcome::Continue));
//!     game.play_turn(Pos::new(8, col)).unwrap();
//! }
//!
//! match game.play_turn(Pos::new(7, 4)).unwrap() {
//!     MoveOutcome::Win(player) => assert_eq!(player.name, "Black"),
//!     other => panic!("expected a win, got {:?}", other),
//! }
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::{ConfigError, GameConfig};
pub use console::{parse_command, Command, ConsoleRunner, LineSource, MoveSource, ParseError, SessionEnd};
pub use error::OmokError;
pub use game::{GameStatus, MoveOutcome, OmokGame, Player};
