//! The I/O boundary the controllers talk to.

use super::action::{Move, MoveError};
use super::session::ScoreTally;
use super::{Board, Outcome, Player};

/// Supplies moves and decisions, and displays what the controllers report.
///
/// Malformed input never crosses this boundary: implementations re-prompt
/// until they can hand back an integer pair or a yes/no answer. Calls to
/// [`MatchIo::next_move`] and [`MatchIo::play_again`] are the only places a
/// match or session waits.
pub trait MatchIo {
    /// Error raised by the underlying input or output.
    type Error;

    /// Displays the board.
    fn show_board(&mut self, board: &Board) -> Result<(), Self::Error>;

    /// Announces whose turn it is.
    fn announce_turn(&mut self, player: Player) -> Result<(), Self::Error>;

    /// Requests the next move for `player`.
    fn next_move(&mut self, board: &Board, player: Player) -> Result<Move, Self::Error>;

    /// Tells the player their move was refused. A new move is requested next.
    fn reject_move(&mut self, mv: &Move, error: &MoveError) -> Result<(), Self::Error>;

    /// Displays the terminal outcome of a match.
    fn show_outcome(&mut self, outcome: Outcome) -> Result<(), Self::Error>;

    /// Displays the running score.
    fn show_score(&mut self, tally: &ScoreTally) -> Result<(), Self::Error>;

    /// Asks whether to start another match.
    fn play_again(&mut self) -> Result<bool, Self::Error>;
}
