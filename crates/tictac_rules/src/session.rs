//! Session controller: repeated matches sharing a running score.

use super::controller::Match;
use super::shell::MatchIo;
use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Wins per player and draws, accumulated across a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct ScoreTally {
    /// Matches won by X.
    x_wins: u32,
    /// Matches won by O.
    o_wins: u32,
    /// Matches that ended in a draw.
    draws: u32,
}

impl ScoreTally {
    /// Adds a finished match to the tally.
    ///
    /// An [`Outcome::InProgress`] is not a result and leaves the tally alone.
    /// Counters stop at `u32::MAX`.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match (outcome.winner(), outcome) {
            (Some(Player::X), _) => &mut self.x_wins,
            (Some(Player::O), _) => &mut self.o_wins,
            (None, Outcome::Draw) => &mut self.draws,
            (None, _) => {
                warn!("Ignoring unfinished match");
                return;
            }
        };
        *counter = counter.saturating_add(1);
    }

    /// Total number of recorded matches.
    pub fn total(&self) -> u64 {
        u64::from(self.x_wins) + u64::from(self.o_wins) + u64::from(self.draws)
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: X {} - O {} - Draws {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// A sequence of matches sharing one [`ScoreTally`].
///
/// Created when play starts, changed only through its own methods, and
/// consumed by [`Session::run`] when the players stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    tally: ScoreTally,
}

impl Session {
    /// Creates a session with an empty tally.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting session");
        Self::default()
    }

    /// Returns the running tally.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Records the outcome of a match played elsewhere.
    pub fn record(&mut self, outcome: Outcome) {
        self.tally.record(outcome);
    }

    /// Plays one fresh match through `io`, records it and reports the score.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by `io`.
    #[instrument(skip_all, fields(played = self.tally.total()))]
    pub fn play_match<I: MatchIo>(&mut self, io: &mut I) -> Result<Outcome, I::Error> {
        let outcome = Match::new().play(io)?;
        self.tally.record(outcome);
        info!(%outcome, tally = %self.tally, "Match recorded");
        io.show_score(&self.tally)?;
        Ok(outcome)
    }

    /// Plays matches until `io` declines another one.
    ///
    /// Returns the final tally.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by `io`.
    #[instrument(skip_all)]
    pub fn run<I: MatchIo>(mut self, io: &mut I) -> Result<ScoreTally, I::Error> {
        loop {
            self.play_match(io)?;
            if !io.play_again()? {
                break;
            }
        }

        info!(tally = %self.tally, matches = self.tally.total(), "Session over");
        Ok(self.tally)
    }
}
