//! Player move history

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Per-session record of how often the player picked each move, and which
/// move they picked most recently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTracker {
    counts: [u32; 3],
    last: Option<Move>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_player_move(&mut self, m: Move) {
        self.count_player_move(m);
        self.set_last_move(m);
    }

    /// Bump the counter for `m` without touching the last move.
    pub fn count_player_move(&mut self, m: Move) {
        self.counts[m.index()] += 1;
    }

    pub fn set_last_move(&mut self, m: Move) {
        self.last = Some(m);
    }

    pub fn count(&self, m: Move) -> u32 {
        self.counts[m.index()]
    }

    /// Number of moves recorded so far
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last
    }

    /// Move with the smallest count. Ties go to Rock, then Paper, then Scissors.
    pub fn least_used_move(&self) -> Move {
        // min_by_key keeps the first minimum it sees
        Move::ALL
            .into_iter()
            .min_by_key(|m| self.count(*m))
            .unwrap_or(Move::Rock)
    }

    /// Move with the largest count. Ties go to Rock, then Paper, then Scissors.
    pub fn most_used_move(&self) -> Move {
        // max_by_key keeps the last maximum, so scan in reverse priority
        Move::ALL
            .into_iter()
            .rev()
            .max_by_key(|m| self.count(*m))
            .unwrap_or(Move::Rock)
    }
}
