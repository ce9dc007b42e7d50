//! Turn order and outcome tracking for a two-player omok game

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::error::{OmokError, Result};

/// A seated player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub stone: Stone,
}

impl Player {
    pub fn new(name: impl Into<String>, stone: Stone) -> Self {
        Self {
            name: name.into(),
            stone,
        }
    }
}

/// Result of a successful turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play passes to the other player
    Continue,
    /// The player who just moved completed five in a row
    Win(Player),
    /// The board filled up without a winner
    Draw,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Game lifecycle. `Won` and `Draw` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Two-player omok game.
///
/// Black moves first. A finished game refuses further moves with
/// [`OmokError::GameAlreadyFinished`]; call [`OmokGame::reset`] to play again.
#[derive(Debug, Clone)]
pub struct OmokGame {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
    last_move: Option<Pos>,
    move_count: usize,
}

impl OmokGame {
    /// New game with the default player names
    pub fn new(board_size: usize) -> Result<Self> {
        Self::with_players(board_size, "Black", "White")
    }

    /// New game with custom names. The first name plays black and moves first.
    pub fn with_players(
        board_size: usize,
        black_name: impl Into<String>,
        white_name: impl Into<String>,
    ) -> Result<Self> {
        let game = Self::seat(Board::new(board_size)?, black_name, white_name);
        info!(size = board_size, black = %game.players[0].name, white = %game.players[1].name, "new game");
        Ok(game)
    }

    fn seat(board: Board, black_name: impl Into<String>, white_name: impl Into<String>) -> Self {
        Self {
            board,
            players: [
                Player::new(black_name, Stone::Black),
                Player::new(white_name, Stone::White),
            ],
            current: 0,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player whose turn it is (the mover of the final turn once finished)
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn winner(&self) -> Option<&Player> {
        match &self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Play the current player's stone at `pos`.
    ///
    /// Board errors are returned unchanged and leave the turn with the same
    /// player. The turn only advances on [`MoveOutcome::Continue`].
    pub fn play_turn(&mut self, pos: Pos) -> Result<MoveOutcome> {
        if self.is_finished() {
            return Err(OmokError::GameAlreadyFinished);
        }

        let player = &self.players[self.current];
        self.board.place(pos, player.stone)?;
        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(player = %player.name, stone = %player.stone, %pos, "stone placed");

        if self.board.has_five_in_a_row(pos, player.stone)? {
            let winner = player.clone();
            info!(winner = %winner.name, moves = self.move_count, "five in a row");
            self.status = GameStatus::Won(winner.clone());
            return Ok(MoveOutcome::Win(winner));
        }

        if self.board.is_full() {
            info!(moves = self.move_count, "board full, draw");
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.current = (self.current + 1) % self.players.len();
        Ok(MoveOutcome::Continue)
    }

    /// Start over on an empty board with the same players
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.move_count = 0;
        info!("game reset");
    }
}

impl Default for OmokGame {
    fn default() -> Self {
        Self::seat(Board::default(), "Black", "White")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut OmokGame, moves: &[(i32, i32)]) -> Vec<MoveOutcome> {
        moves
            .iter()
            .map(|&(r, c)| game.play_turn(Pos::new(r, c)).unwrap())
            .collect()
    }

    #[test]
    fn test_default_players() {
        let game = OmokGame::new(15).unwrap();
        assert_eq!(game.players()[0], Player::new("Black", Stone::Black));
        assert_eq!(game.players()[1], Player::new("White", Stone::White));
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_invalid_board_size() {
        assert_eq!(OmokGame::new(4).err(), Some(OmokError::InvalidBoardSize(4)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = OmokGame::new(15).unwrap();
        for (i, &(r, c)) in [(0, 0), (5, 5), (0, 1), (5, 6)].iter().enumerate() {
            assert_eq!(game.current_player_index(), i % 2);
            let stone = game.current_player().stone;
            assert_eq!(game.play_turn(Pos::new(r, c)), Ok(MoveOutcome::Continue));
            assert_eq!(game.board().get(Pos::new(r, c)), Ok(stone));
        }
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.move_count(), 4);
        assert_eq!(game.last_move(), Some(Pos::new(5, 6)));
    }

    #[test]
    fn test_failed_move_keeps_turn() {
        let mut game = OmokGame::new(15).unwrap();
        game.play_turn(Pos::new(7, 7)).unwrap();
        assert_eq!(game.current_player_index(), 1);

        assert_eq!(
            game.play_turn(Pos::new(7, 7)),
            Err(OmokError::CellOccupied { row: 7, col: 7 })
        );
        assert!(matches!(
            game.play_turn(Pos::new(15, 0)),
            Err(OmokError::OutOfBounds { .. })
        ));
        assert_eq!(game.current_player_index(), 1);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.last_move(), Some(Pos::new(7, 7)));
        assert_eq!(game.status(), &GameStatus::InProgress);
    }

    #[test]
    fn test_black_wins() {
        let mut game = OmokGame::new(15).unwrap();
        let outcomes = play_all(
            &mut game,
            &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3)],
        );
        assert!(outcomes.iter().all(|o| *o == MoveOutcome::Continue));

        let black = game.players()[0].clone();
        assert_eq!(game.play_turn(Pos::new(7, 11)), Ok(MoveOutcome::Win(black.clone())));
        assert_eq!(game.winner(), Some(&black));
        assert_eq!(game.status(), &GameStatus::Won(black.clone()));
        // Winner's turn does not pass on
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.current_player(), &black);
    }

    #[test]
    fn test_white_wins_diagonal() {
        let mut game = OmokGame::with_players(15, "Ann", "Bo").unwrap();
        play_all(
            &mut game,
            &[(0, 14), (1, 1), (0, 13), (2, 2), (0, 12), (3, 3), (0, 10), (4, 4), (14, 0)],
        );
        let outcome = game.play_turn(Pos::new(5, 5)).unwrap();
        assert_eq!(outcome, MoveOutcome::Win(Player::new("Bo", Stone::White)));
        assert_eq!(game.current_player_index(), 1);
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_finished_game_refuses_moves() {
        let mut game = OmokGame::new(15).unwrap();
        play_all(
            &mut game,
            &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)],
        );
        assert!(game.is_finished());
        let before = game.board().clone();
        assert_eq!(game.play_turn(Pos::new(10, 10)), Err(OmokError::GameAlreadyFinished));
        assert_eq!(game.board(), &before);
        assert_eq!(game.winner().map(|p| p.stone), Some(Stone::Black));
    }

    #[test]
    fn test_draw_on_full_board() {
        // 5x5 fill where no line reaches five: rows alternate patterns
        // B B W W B / W W B B W / B B W W B / W W B B W / B B W W B
        let mut game = OmokGame::new(5).unwrap();
        let blacks = [
            (0, 0), (0, 1), (0, 4), (1, 2), (1, 3), (2, 0), (2, 1), (2, 4), (3, 2), (3, 3), (4, 0),
            (4, 1), (4, 4),
        ];
        let whites = [
            (0, 2), (0, 3), (1, 0), (1, 1), (1, 4), (2, 2), (2, 3), (3, 0), (3, 1), (3, 4), (4, 2),
            (4, 3),
        ];
        let mut outcome = MoveOutcome::Continue;
        for i in 0..blacks.len() {
            outcome = game.play_turn(Pos::new(blacks[i].0, blacks[i].1)).unwrap();
            if let Some(&(r, c)) = whites.get(i) {
                assert_eq!(outcome, MoveOutcome::Continue);
                outcome = game.play_turn(Pos::new(r, c)).unwrap();
                if i + 1 < blacks.len() {
                    assert_eq!(outcome, MoveOutcome::Continue);
                }
            }
        }
        assert_eq!(outcome, MoveOutcome::Draw);
        assert_eq!(game.status(), &GameStatus::Draw);
        assert!(game.winner().is_none());
        assert!(game.board().is_full());
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.play_turn(Pos::new(0, 0)), Err(OmokError::GameAlreadyFinished));
    }

    #[test]
    fn test_reset_starts_over() {
        let mut game = OmokGame::new(15).unwrap();
        play_all(
            &mut game,
            &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)],
        );
        game.reset();
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.move_count(), 0);
        assert!(game.last_move().is_none());
        assert!(game.board().is_board_empty());
        assert_eq!(game.play_turn(Pos::new(7, 7)), Ok(MoveOutcome::Continue));
    }

    #[test]
    fn test_default_game() {
        let game = OmokGame::default();
        let fresh = OmokGame::new(15).unwrap();
        assert_eq!(game.board(), fresh.board());
        assert_eq!(game.players(), fresh.players());
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert_eq!(game.move_count(), 0);
    }
}
