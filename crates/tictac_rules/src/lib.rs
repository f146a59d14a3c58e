//! Pure tic-tac-toe rules.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 value, every move yields a new board
//! - **Rules**: move validation, move application, outcome evaluation
//! - **Match**: drives one round through [`MatchIo`]
//! - **Session**: repeated matches with a running [`ScoreTally`]
//!
//! Nothing here performs I/O. Input and output cross the [`MatchIo`] trait.
//!
//! # Example
//!
//! ```
//! use tictac_rules::{Match, MatchPhase, Move, Outcome, Player};
//!
//! let mut game = Match::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.submit(Move::new(row, col)).unwrap();
//! }
//! assert_eq!(game.phase(), MatchPhase::Finished(Outcome::Won(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod invariants;
mod rules;
mod session;
mod shell;
mod types;

pub use action::{InvalidMoveReason, Move, MoveError};
pub use controller::{Match, MatchPhase, PlayedMove};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MarkBalanceInvariant, MatchInvariants,
};
pub use rules::{apply_move, evaluate_outcome, is_valid_move};
pub use session::{ScoreTally, Session};
pub use shell::MatchIo;
pub use types::{Board, Cell, Outcome, Player, SIZE};
