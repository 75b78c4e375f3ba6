//! Round orchestration

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::history::HistoryTracker;
use crate::moves::{Move, Outcome};
use crate::random::{RandomSource, SeededRng};
use crate::selector::select_strategy;
use crate::strategy::execute_strategy;
use crate::{describe_round, resolve};

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
    pub strategy_name: String,
    pub description: String,
}

impl RoundResult {
    /// One line for the game log, naming the strategy the computer used.
    pub fn log_line(&self) -> String {
        format!("{} (Computer: {})", self.description, self.strategy_name)
    }
}

/// Cumulative scoreboard for a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTotals {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl SessionTotals {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Rounds counted so far
    pub fn total(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}

/// Where a session is in its round cycle.
///
/// `RoundInProgress` is only held while `play_round` runs, so callers on the
/// session's own thread always observe `Idle` between rounds. It shows up in
/// trace logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    RoundInProgress,
}

/// One player's game against the computer.
///
/// Owns the move history and the scoreboard; strategies only ever borrow the
/// history. Not meant to be shared across threads without external locking.
#[derive(Clone, Debug)]
pub struct GameSession<R: RandomSource = SeededRng> {
    history: HistoryTracker,
    totals: SessionTotals,
    state: SessionState,
    rng: R,
}

impl GameSession<SeededRng> {
    /// Session backed by a seeded generator, reproducible for the same seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::new(SeededRng::new(seed, 0))
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            history: HistoryTracker::new(),
            totals: SessionTotals::default(),
            state: SessionState::Idle,
            rng,
        }
    }

    /// Play one round against `player_move`.
    ///
    /// Move counts include this round, but the last move the strategies see
    /// is still the previous round's until the outcome is settled.
    pub fn play_round(&mut self, player_move: Move) -> RoundResult {
        self.state = SessionState::RoundInProgress;
        log::trace!("round {} started ({:?})", self.rounds_played() + 1, self.state);

        self.history.count_player_move(player_move);
        let strategy = select_strategy(&mut self.rng);
        let computer_move = execute_strategy(strategy, player_move, &self.history, &mut self.rng);
        let outcome = resolve(player_move, computer_move);
        self.totals.record(outcome);
        self.history.set_last_move(player_move);

        log::debug!(
            "{} vs {} ({}): {}",
            player_move,
            computer_move,
            strategy,
            outcome.label()
        );
        self.state = SessionState::Idle;

        RoundResult {
            player_move,
            computer_move,
            outcome,
            strategy_name: strategy.name().to_string(),
            description: describe_round(player_move, computer_move),
        }
    }

    /// Parse `input` as a move and play it. Unknown input is rejected before
    /// any state changes.
    pub fn play_symbol(&mut self, input: &str) -> Result<RoundResult, EngineError> {
        let player_move = input.parse::<Move>()?;
        Ok(self.play_round(player_move))
    }

    pub fn totals(&self) -> SessionTotals {
        self.totals
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn rounds_played(&self) -> u32 {
        self.totals.total()
    }
}
