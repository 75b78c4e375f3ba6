//! Computer strategies and their execution

use serde::{Deserialize, Serialize};

use crate::history::HistoryTracker;
use crate::moves::Move;
use crate::random::RandomSource;

/// How the computer picks its move for a round.
///
/// LeastUsed and MostUsed look at the *player's* move counts, not the
/// computer's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Play whatever beats the player's current move.
    Cheating,
    /// Uniform random move.
    Random,
    /// Beat the move the player has used least.
    LeastUsed,
    /// Beat the move the player has used most.
    MostUsed,
    /// Beat the player's last recorded move. Random until one exists.
    LastUsed,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Cheating,
        Strategy::Random,
        Strategy::LeastUsed,
        Strategy::MostUsed,
        Strategy::LastUsed,
    ];

    /// Display name, as shown in the game log
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Cheating => "Cheat",
            Strategy::Random => "Random",
            Strategy::LeastUsed => "LeastUsed",
            Strategy::MostUsed => "MostUsed",
            Strategy::LastUsed => "LastUsed",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Strategy::Cheating => "Peeks at your move and plays the one that beats it.",
            Strategy::Random => "Picks rock, paper or scissors at random.",
            Strategy::LeastUsed => "Beats the move you have played the fewest times.",
            Strategy::MostUsed => "Beats the move you have played the most times.",
            Strategy::LastUsed => "Beats the move you played last.",
        }
    }

    /// Pick the computer's move. Never mutates `history`.
    pub fn pick<R: RandomSource>(
        self,
        player_move: Move,
        history: &HistoryTracker,
        rng: &mut R,
    ) -> Move {
        execute_strategy(self, player_move, history, rng)
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `player_move` - The move the player made this round
/// * `history` - The player's move history, read-only
/// * `rng` - Source for the Random draw and the LastUsed fallback
pub fn execute_strategy<R: RandomSource>(
    strategy: Strategy,
    player_move: Move,
    history: &HistoryTracker,
    rng: &mut R,
) -> Move {
    match strategy {
        Strategy::Cheating => player_move.counter(),
        Strategy::Random => random_move(rng),
        Strategy::LeastUsed => history.least_used_move().counter(),
        Strategy::MostUsed => history.most_used_move().counter(),
        Strategy::LastUsed => match history.last_move() {
            Some(last) => last.counter(),
            None => random_move(rng),
        },
    }
}

fn random_move<R: RandomSource>(rng: &mut R) -> Move {
    Move::ALL[rng.next_range(3) as usize]
}
