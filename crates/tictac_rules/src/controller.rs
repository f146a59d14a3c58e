//! Match controller: drives one round from an empty board to an outcome.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, MatchInvariants};
use super::rules;
use super::shell::MatchIo;
use super::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the given player to supply a move.
    AwaitingMove(Player),
    /// A move was just committed and the board has not been judged yet.
    Evaluating,
    /// The match reached a terminal outcome.
    Finished(Outcome),
}

/// An accepted move together with the board it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Player who made the move.
    pub player: Player,
    /// Coordinates that were marked.
    pub mv: Move,
    /// Board right after the move.
    pub board: Board,
}

/// One round of tic-tac-toe.
///
/// Every accepted move replaces the board with a new value. The boards
/// produced along the way stay available through [`Match::history`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub(crate) board: Board,
    pub(crate) phase: MatchPhase,
    pub(crate) history: Vec<PlayedMove>,
}

impl Match {
    /// Creates a match on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            phase: MatchPhase::AwaitingMove(Player::X),
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the player whose turn it is, if the match is waiting on one.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            MatchPhase::AwaitingMove(player) => Some(player),
            MatchPhase::Evaluating | MatchPhase::Finished(_) => None,
        }
    }

    /// Returns the terminal outcome, if the match is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            MatchPhase::Finished(outcome) => Some(outcome),
            MatchPhase::AwaitingMove(_) | MatchPhase::Evaluating => None,
        }
    }

    /// Returns accepted moves in the order they were played.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Submits a move for the player whose turn it is.
    ///
    /// On success the board is replaced and the match either finishes or
    /// passes the turn. On failure nothing changes and the same player is
    /// still to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidMove`] when the move fails validation,
    /// [`MoveError::MatchOver`] when the match is already finished.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit(&mut self, mv: Move) -> Result<MatchPhase, MoveError> {
        let player = match self.phase {
            MatchPhase::AwaitingMove(player) => player,
            MatchPhase::Evaluating | MatchPhase::Finished(_) => {
                warn!(%mv, "Move submitted to a finished match");
                return Err(MoveError::MatchOver);
            }
        };

        let board = rules::apply_move(&self.board, &mv, player).inspect_err(|e| {
            warn!(%mv, %player, error = %e, "Rejected move");
        })?;

        self.board = board;
        self.history.push(PlayedMove { player, mv, board });
        self.phase = MatchPhase::Evaluating;
        debug!(%mv, %player, "Move accepted");

        debug_assert!(
            MatchInvariants::check_all(self).is_ok(),
            "match invariants violated after {mv}"
        );

        Ok(self.settle())
    }

    /// Judges the board after a committed move.
    fn settle(&mut self) -> MatchPhase {
        let Some(last) = self.history.last() else {
            self.phase = MatchPhase::AwaitingMove(Player::X);
            return self.phase;
        };

        let outcome = rules::evaluate_outcome(&self.board, &last.mv);
        self.phase = if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Match finished");
            MatchPhase::Finished(outcome)
        } else {
            MatchPhase::AwaitingMove(last.player.opponent())
        };

        debug!(phase = ?self.phase, "Phase transition");
        self.phase
    }

    /// Plays the match to completion through `io`.
    ///
    /// Invalid moves are reported back to `io` and the same player is asked
    /// again. Returns the terminal outcome.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by `io`.
    #[instrument(skip_all)]
    pub fn play<I: MatchIo>(&mut self, io: &mut I) -> Result<Outcome, I::Error> {
        io.show_board(&self.board)?;

        loop {
            match self.phase {
                MatchPhase::Finished(outcome) => {
                    io.show_outcome(outcome)?;
                    return Ok(outcome);
                }
                MatchPhase::Evaluating => {
                    self.settle();
                }
                MatchPhase::AwaitingMove(player) => {
                    io.announce_turn(player)?;
                    loop {
                        let mv = io.next_move(&self.board, player)?;
                        match self.submit(mv) {
                            Ok(_) => break,
                            Err(e) => io.reject_move(&mv, &e)?,
                        }
                    }
                    io.show_board(&self.board)?;
                }
            }
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
