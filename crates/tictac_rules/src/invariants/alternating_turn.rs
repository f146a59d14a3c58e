//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Match, MatchPhase, Player, PlayedMove};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show an X, O, X, O, ... pattern and, while the match
/// waits for a move, the player to move follows from the history length.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Checks the alternation of a move sequence on its own.
    pub fn sequence_holds(history: &[PlayedMove]) -> bool {
        history.iter().enumerate().all(|(i, played)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            played.player == expected
        })
    }
}

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let history = game.history();
        if !Self::sequence_holds(history) {
            return false;
        }

        match game.phase() {
            MatchPhase::AwaitingMove(player) => {
                let expected = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                player == expected
            }
            MatchPhase::Evaluating | MatchPhase::Finished(_) => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
