//! Tests for match and session controllers driven through a scripted shell.

use std::collections::VecDeque;
use tictac_rules::{Board, Match, MatchIo, Move, MoveError, Outcome, Player, ScoreTally, Session};

/// Events observed by the scripted shell.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Board(Board),
    Turn(Player),
    Rejected(Move),
    Outcome(Outcome),
    Score(ScoreTally),
}

/// Shell that replays canned moves and answers.
#[derive(Debug, Default)]
struct ScriptedIo {
    moves: VecDeque<(i64, i64)>,
    answers: VecDeque<bool>,
    events: Vec<Event>,
}

#[derive(Debug, PartialEq, Eq)]
struct ScriptExhausted;

impl ScriptedIo {
    fn new(moves: &[(i64, i64)], answers: &[bool]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
            events: Vec::new(),
        }
    }

    fn turns(&self) -> Vec<Player> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Turn(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl MatchIo for ScriptedIo {
    type Error = ScriptExhausted;

    fn show_board(&mut self, board: &Board) -> Result<(), ScriptExhausted> {
        self.events.push(Event::Board(*board));
        Ok(())
    }

    fn announce_turn(&mut self, player: Player) -> Result<(), ScriptExhausted> {
        self.events.push(Event::Turn(player));
        Ok(())
    }

    fn next_move(&mut self, _board: &Board, _player: Player) -> Result<Move, ScriptExhausted> {
        self.moves
            .pop_front()
            .map(|(r, c)| Move::new(r, c))
            .ok_or(ScriptExhausted)
    }

    fn reject_move(&mut self, mv: &Move, _error: &MoveError) -> Result<(), ScriptExhausted> {
        self.events.push(Event::Rejected(*mv));
        Ok(())
    }

    fn show_outcome(&mut self, outcome: Outcome) -> Result<(), ScriptExhausted> {
        self.events.push(Event::Outcome(outcome));
        Ok(())
    }

    fn show_score(&mut self, tally: &ScoreTally) -> Result<(), ScriptExhausted> {
        self.events.push(Event::Score(*tally));
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool, ScriptExhausted> {
        self.answers.pop_front().ok_or(ScriptExhausted)
    }
}

const X_WINS_TOP_ROW: [(i64, i64); 5] = [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)];
const DRAW: [(i64, i64); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];
const O_WINS_MIDDLE_COLUMN: [(i64, i64); 6] = [(0, 0), (0, 1), (2, 2), (1, 1), (2, 0), (2, 1)];

#[test]
fn test_x_wins_top_row_end_to_end() {
    let mut io = ScriptedIo::new(&X_WINS_TOP_ROW, &[false]);
    let tally = Session::new().run(&mut io).expect("script suffices");

    assert_eq!(tally, ScoreTally::new(1, 0, 0));
    assert!(io.events.contains(&Event::Outcome(Outcome::Won(Player::X))));
    assert_eq!(io.events.last(), Some(&Event::Score(ScoreTally::new(1, 0, 0))));
}

#[test]
fn test_three_matches_accumulate() {
    let moves: Vec<_> = X_WINS_TOP_ROW
        .iter()
        .chain(DRAW.iter())
        .chain(O_WINS_MIDDLE_COLUMN.iter())
        .copied()
        .collect();
    let mut io = ScriptedIo::new(&moves, &[true, true, false]);

    let tally = Session::new().run(&mut io).expect("script suffices");

    assert_eq!(tally, ScoreTally::new(1, 1, 1));
    let outcomes: Vec<_> = io
        .events
        .iter()
        .filter_map(|e| match e {
            Event::Outcome(o) => Some(*o),
            _ => None,
        })
        .collect();
    assert_eq!(
        outcomes,
        vec![Outcome::Won(Player::X), Outcome::Draw, Outcome::Won(Player::O)]
    );
}

#[test]
fn test_each_match_starts_fresh_with_x() {
    let moves: Vec<_> = X_WINS_TOP_ROW.iter().chain(X_WINS_TOP_ROW.iter()).copied().collect();
    let mut io = ScriptedIo::new(&moves, &[true, false]);

    let tally = Session::new().run(&mut io).expect("script suffices");

    assert_eq!(tally, ScoreTally::new(2, 0, 0));
    let empty_boards = io
        .events
        .iter()
        .filter(|e| **e == Event::Board(Board::empty()))
        .count();
    assert_eq!(empty_boards, 2);
    assert_eq!(
        io.turns(),
        vec![
            Player::X, Player::O, Player::X, Player::O, Player::X,
            Player::X, Player::O, Player::X, Player::O, Player::X,
        ]
    );
}

#[test]
fn test_invalid_moves_reprompt_same_player() {
    let mut io = ScriptedIo::new(
        &[(0, 0), (0, 0), (3, 0), (1, 1), (0, 1), (2, 2), (0, 2)],
        &[],
    );
    let mut game = Match::new();

    let outcome = game.play(&mut io).expect("script suffices");

    assert_eq!(outcome, Outcome::Won(Player::X));
    assert_eq!(
        io.events
            .iter()
            .filter(|e| matches!(e, Event::Rejected(_)))
            .count(),
        2
    );
    assert_eq!(io.turns(), vec![Player::X, Player::O, Player::X, Player::O, Player::X]);
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_shell_error_propagates() {
    let mut io = ScriptedIo::new(&[(0, 0)], &[]);
    let result = Session::new().run(&mut io);
    assert_eq!(result, Err(ScriptExhausted));
}

#[test]
fn test_finished_match_replays_outcome_without_input() {
    let mut io = ScriptedIo::new(&X_WINS_TOP_ROW, &[]);
    let mut game = Match::new();
    game.play(&mut io).expect("script suffices");

    let mut idle = ScriptedIo::default();
    assert_eq!(game.play(&mut idle), Ok(Outcome::Won(Player::X)));
}
