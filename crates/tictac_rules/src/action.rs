//! Moves and the errors raised when a move cannot be committed.

use super::types::SIZE;
use serde::{Deserialize, Serialize};

/// A move: the `(row, col)` cell a player wants to mark.
///
/// Coordinates are kept exactly as the shell read them, so values outside
/// the board can still be represented and rejected by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row index, valid range 0..=2.
    pub row: i64,
    /// Column index, valid range 0..=2.
    pub col: i64,
}

impl Move {
    /// Returns the board coordinates if both values are on the board.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < SIZE)?;
        Some((row, col))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a move failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveReason {
    /// A coordinate lies outside the 3x3 grid.
    #[display("({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
    /// The addressed cell already holds a mark.
    #[display("({}, {}) is already taken", row, col)]
    Occupied {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move failed validation against the board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMoveReason),

    /// The match has already reached a terminal outcome.
    #[display("Match is already over")]
    MatchOver,
}

impl std::error::Error for MoveError {}
