//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{Board, Match, Player};
use super::Invariant;

/// Invariant: X count minus O count is 0 or 1.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn board_holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<Match> for MarkBalanceInvariant {
    fn holds(game: &Match) -> bool {
        Self::board_holds(game.board())
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
