//! Rules engine for tic-tac-toe.
//!
//! Pure functions that validate moves, commit them to a board, and evaluate
//! the terminal condition after each move. Rules are kept apart from board
//! storage so the controllers can compose them.

pub mod win;

use super::action::{InvalidMoveReason, Move, MoveError};
use super::{Board, Outcome, Player};
use tracing::{debug, instrument};

/// Checks whether `mv` may be played on `board`.
///
/// A move is valid when both coordinates are in `0..=2` and the addressed
/// cell is empty.
#[instrument(skip(board))]
pub fn is_valid_move(board: &Board, mv: &Move) -> bool {
    check_move(board, mv).is_ok()
}

/// Validates `mv`, reporting why it fails.
fn check_move(board: &Board, mv: &Move) -> Result<(usize, usize), MoveError> {
    let (row, col) = mv.cell().ok_or(MoveError::InvalidMove(InvalidMoveReason::OutOfRange {
        row: mv.row,
        col: mv.col,
    }))?;

    if !board.get(row, col).is_empty() {
        return Err(MoveError::InvalidMove(InvalidMoveReason::Occupied {
            row: mv.row,
            col: mv.col,
        }));
    }

    Ok((row, col))
}

/// Commits `mv` for `player`, returning the new board.
///
/// The input board is left as it was.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if [`is_valid_move`] is false.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, mv: &Move, player: Player) -> Result<Board, MoveError> {
    let (row, col) = check_move(board, mv)?;
    Ok(board.with_move(row, col, player))
}

/// Evaluates the board right after `last_move` was applied.
///
/// Only the row and column of the last move plus the two diagonals are
/// inspected, since a new line can only run through the cell just played.
/// Checks run in order: row, column, diagonals, full board.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board, last_move: &Move) -> Outcome {
    let line_winner = last_move.cell().and_then(|(row, col)| {
        win::winning_row(board, row).or_else(|| win::winning_col(board, col))
    });

    let outcome = match line_winner.or_else(|| win::winning_diagonal(board)) {
        Some(player) => Outcome::Won(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    };

    debug!(?outcome, "Evaluated board");
    outcome
}
