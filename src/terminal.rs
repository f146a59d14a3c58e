//! Line-based terminal shell.
//!
//! Reads moves and yes/no answers from any [`BufRead`] and writes prompts,
//! boards and results to any [`Write`]. Malformed input is re-prompted here
//! and never reaches the rules.

use crate::config::GameConfig;
use crate::render::render_board;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::str::FromStr;
use tictac_rules::{Board, MatchIo, Move, MoveError, Outcome, Player, ScoreTally};
use tracing::{debug, instrument, warn};

/// Error raised by the terminal shell.
#[derive(Debug, Display, Error, From)]
pub enum ShellError {
    /// Reading or writing the terminal failed.
    #[display("Terminal I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Input ended while the shell was waiting for an answer.
    #[display("Input closed before the session ended")]
    InputClosed,
}

/// Answer to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
enum Answer {
    #[strum(serialize = "y", serialize = "yes")]
    Yes,
    #[strum(serialize = "n", serialize = "no")]
    No,
}

/// [`MatchIo`] over a line-oriented reader and writer.
pub struct TerminalShell<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> TerminalShell<R, W> {
    /// Creates a shell reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the shell, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` without a newline and reads one line.
    fn ask(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!(prompt, "Input closed");
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses as an integer.
    ///
    /// Integers too large for `i64` are clamped, so they come back as an
    /// off-board coordinate for the rules to reject.
    fn ask_coordinate(&mut self, prompt: &str) -> Result<i64, ShellError> {
        loop {
            let line = self.ask(prompt)?;
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                    debug!(input = %line, "Coordinate clamped to i64::MAX");
                    return Ok(i64::MAX);
                }
                Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
                    debug!(input = %line, "Coordinate clamped to i64::MIN");
                    return Ok(i64::MIN);
                }
                Err(e) => {
                    debug!(input = %line, error = %e, "Malformed coordinate");
                    writeln!(self.output, "Please enter a whole number.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> MatchIo for TerminalShell<R, W> {
    type Error = ShellError;

    fn show_board(&mut self, board: &Board) -> Result<(), ShellError> {
        write!(self.output, "{}", render_board(board))?;
        Ok(())
    }

    fn announce_turn(&mut self, player: Player) -> Result<(), ShellError> {
        writeln!(self.output, "Player {}'s turn!", self.config.name_for(player))?;
        Ok(())
    }

    #[instrument(skip(self, _board))]
    fn next_move(&mut self, _board: &Board, player: Player) -> Result<Move, ShellError> {
        let row = self.ask_coordinate("Pick your row: ")?;
        let col = self.ask_coordinate("Pick your column: ")?;
        Ok(Move::new(row, col))
    }

    fn reject_move(&mut self, mv: &Move, error: &MoveError) -> Result<(), ShellError> {
        debug!(%mv, %error, "Move rejected");
        writeln!(self.output, "Invalid move, try again.")?;
        Ok(())
    }

    fn show_outcome(&mut self, outcome: Outcome) -> Result<(), ShellError> {
        match outcome {
            Outcome::Won(player) => writeln!(
                self.output,
                "Congratulations, Player {} wins!",
                self.config.name_for(player)
            )?,
            Outcome::Draw => writeln!(self.output, "Tie")?,
            Outcome::InProgress => {}
        }
        Ok(())
    }

    fn show_score(&mut self, tally: &ScoreTally) -> Result<(), ShellError> {
        writeln!(self.output, "{}", tally)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn play_again(&mut self) -> Result<bool, ShellError> {
        loop {
            let line = self.ask("Play again? (y/n): ")?;
            match Answer::from_str(&line) {
                Ok(Answer::Yes) => return Ok(true),
                Ok(Answer::No) => return Ok(false),
                Err(_) => {
                    debug!(input = %line, "Unrecognized answer");
                    writeln!(self.output, "Please answer y or n.")?;
                }
            }
        }
    }
}
