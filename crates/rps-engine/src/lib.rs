//! Rock Paper Scissors Engine
//!
//! Core game logic for a player-versus-computer Rock Paper Scissors game.
//! Each round the computer picks one of several history-driven strategies
//! at random and answers the player's move with it.
//! This crate is compiled to:
//! - Native (for the console front end)
//! - WASM (for a browser view)

mod error;
mod moves;
mod history;
mod random;
mod strategy;
mod selector;
mod game;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::EngineError;
pub use moves::{Move, Outcome};
pub use history::HistoryTracker;
pub use random::{RandomSource, SeededRng};
#[cfg(any(test, feature = "testing"))]
pub use random::ScriptedRng;
pub use strategy::{execute_strategy, Strategy};
pub use selector::{select_strategy, strategy_for_draw, STRATEGY_BANDS};
pub use game::{GameSession, RoundResult, SessionState, SessionTotals};

/// Decide a round from the player's point of view
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

/// The rule that decided a pair of distinct moves, e.g. "Paper covers rock".
/// `None` when both moves are equal.
pub fn relationship(a: Move, b: Move) -> Option<&'static str> {
    match (a, b) {
        (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Rock) => Some("Rock breaks scissors"),
        (Move::Paper, Move::Rock) | (Move::Rock, Move::Paper) => Some("Paper covers rock"),
        (Move::Scissors, Move::Paper) | (Move::Paper, Move::Scissors) => Some("Scissors cut paper"),
        _ => None,
    }
}

/// Human readable account of a round
pub fn describe_round(player: Move, computer: Move) -> String {
    let outcome = resolve(player, computer);
    let moves = format!("Player: {} Computer: {} ({})", player, computer, outcome.label());
    match relationship(player, computer) {
        Some(rule) => format!("{}. {}", rule, moves),
        None => moves,
    }
}

#[cfg(test)]
mod tests {
    use super::{describe_round, relationship, resolve, Move, Outcome};
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        prop::sample::select(Move::ALL.to_vec())
    }

    #[test]
    fn test_resolve_table() {
        assert_eq!(resolve(Move::Rock, Move::Rock), Outcome::Tie);
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::PlayerWin);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::ComputerWin);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::PlayerWin);
        assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::ComputerWin);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::PlayerWin);
        assert_eq!(resolve(Move::Scissors, Move::Rock), Outcome::ComputerWin);
    }

    #[test]
    fn test_describe_round() {
        assert_eq!(
            describe_round(Move::Rock, Move::Paper),
            "Paper covers rock. Player: Rock Computer: Paper (Computer wins)"
        );
        assert_eq!(
            describe_round(Move::Scissors, Move::Paper),
            "Scissors cut paper. Player: Scissors Computer: Paper (Player wins)"
        );
        assert_eq!(
            describe_round(Move::Paper, Move::Paper),
            "Player: Paper Computer: Paper (Tie)"
        );
    }

    #[test]
    fn test_relationship_is_symmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(relationship(a, b), relationship(b, a));
            }
        }
    }

    proptest! {
        #[test]
        fn tie_iff_equal(a in any_move(), b in any_move()) {
            prop_assert_eq!(resolve(a, b) == Outcome::Tie, a == b);
        }

        #[test]
        fn swapping_sides_swaps_winner(a in any_move(), b in any_move()) {
            let expected = match resolve(a, b) {
                Outcome::PlayerWin => Outcome::ComputerWin,
                Outcome::ComputerWin => Outcome::PlayerWin,
                Outcome::Tie => Outcome::Tie,
            };
            prop_assert_eq!(resolve(b, a), expected);
        }

        #[test]
        fn counter_move_always_wins_for_computer(m in any_move()) {
            prop_assert_eq!(resolve(m, m.counter()), Outcome::ComputerWin);
        }
    }
}
