//! Text front end
//!
//! Reads `row col` commands from an injected [`MoveSource`], drives an
//! [`OmokGame`] and writes the board and messages to any `Write` sink.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::board::Pos;
use crate::game::{MoveOutcome, OmokGame};

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Pos),
    Quit,
}

/// Why a line of input could not be turned into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("enter the row and column separated by a space")]
    WrongArity,

    #[error("{0:?} is not an integer")]
    NotAnInteger(String),
}

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Parse `row col` or a quit word.
pub fn parse_command(raw: &str) -> Result<Command, ParseError> {
    let trimmed = raw.trim();
    if QUIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(ParseError::WrongArity);
    };
    let parse = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| ParseError::NotAnInteger(s.to_string()))
    };
    Ok(Command::Move(Pos::new(parse(*row)?, parse(*col)?)))
}

/// Source of raw input lines, one per prompt.
///
/// `Ok(None)` signals end of input.
pub trait MoveSource {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// [`MoveSource`] over a buffered reader, echoing prompts to a writer
pub struct LineSource<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> MoveSource for LineSource<R, W> {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// How a console session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(MoveOutcome),
    Quit,
}

/// Prompt / play / render loop
pub struct ConsoleRunner<S, W> {
    source: S,
    out: W,
}

impl<S: MoveSource, W: Write> ConsoleRunner<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    /// Run until the game ends or the player quits.
    ///
    /// Bad input and rejected moves are reported and re-prompted; only I/O
    /// failures end the session with an error.
    pub fn run(&mut self, game: &mut OmokGame) -> io::Result<SessionEnd> {
        writeln!(
            self.out,
            "Omok on a {0}x{0} board. Enter moves as 'row col', or q to quit.",
            game.board().size()
        )?;

        loop {
            writeln!(self.out, "{}", game.board())?;

            let player = game.current_player();
            let prompt = format!("{}({}) to move: ", player.name, player.stone);
            let Some(line) = self.source.next_line(&prompt)? else {
                writeln!(self.out, "Input closed, leaving the game.")?;
                return Ok(SessionEnd::Quit);
            };

            let pos = match parse_command(&line) {
                Ok(Command::Move(pos)) => pos,
                Ok(Command::Quit) => {
                    writeln!(self.out, "Leaving the game.")?;
                    return Ok(SessionEnd::Quit);
                }
                Err(e) => {
                    warn!(input = line.trim(), "unparseable move");
                    writeln!(self.out, "Invalid input: {}", e)?;
                    continue;
                }
            };

            match game.play_turn(pos) {
                Ok(outcome) if outcome.is_terminal() => {
                    writeln!(self.out, "{}", game.board())?;
                    self.report(&outcome)?;
                    return Ok(SessionEnd::Finished(outcome));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(%pos, error = %e, "move rejected");
                    writeln!(self.out, "Invalid move: {}", e)?;
                }
            }
        }
    }

    fn report(&mut self, outcome: &MoveOutcome) -> io::Result<()> {
        match outcome {
            MoveOutcome::Win(player) => {
                writeln!(self.out, "{}({}) wins!", player.name, player.stone)
            }
            MoveOutcome::Draw => writeln!(self.out, "The board is full. The game is a draw."),
            MoveOutcome::Continue => Ok(()),
        }
    }
}
