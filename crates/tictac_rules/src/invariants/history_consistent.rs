//! History consistency invariant: the history replays to the board.

use super::super::{Board, Match};
use super::Invariant;

/// Invariant: Replaying the history onto an empty board reproduces the
/// current board, and each recorded board is the one its move produced.
///
/// The replay also catches a cell being marked twice.
pub struct HistoryConsistentInvariant;

impl Invariant<Match> for HistoryConsistentInvariant {
    fn holds(game: &Match) -> bool {
        let mut replayed = Board::empty();

        for played in game.history() {
            let Some((row, col)) = played.mv.cell() else {
                return false;
            };
            if !replayed.get(row, col).is_empty() {
                return false;
            }
            replayed = replayed.with_move(row, col, played.player);
            if replayed != played.board {
                return false;
            }
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, PlayedMove, Player};

    #[test]
    fn test_empty_match_holds() {
        assert!(HistoryConsistentInvariant::holds(&Match::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Match::new();
        for (r, c) in [(0, 0), (2, 2), (1, 2)] {
            game.submit(Move::new(r, c)).expect("valid move");
        }
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    fn one_move_match() -> Match {
        let mut game = Match::new();
        game.submit(Move::new(1, 1)).expect("valid move");
        game
    }

    #[test]
    fn test_extra_mark_on_board_violates() {
        let mut game = one_move_match();
        game.board = game.board.with_move(0, 0, Player::O);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_recorded_board_mismatch_violates() {
        let mut game = one_move_match();
        game.history[0].board = Board::empty();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_off_board_history_entry_violates() {
        let mut game = one_move_match();
        game.history[0].mv = Move::new(3, 3);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_cell_played_twice_violates() {
        let mut game = one_move_match();
        let repeat = game.history[0];
        game.history.push(PlayedMove {
            player: Player::O,
            ..repeat
        });
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
