//! Moves, the beats relation, and round outcomes

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A move in Rock Paper Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in tie-break priority order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True iff `self` defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Paper, Move::Rock) | (Move::Scissors, Move::Paper)
        )
    }

    /// The unique move that beats `self`.
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Parse a one-letter symbol, case-insensitively.
    pub fn from_symbol(symbol: char) -> Result<Move, EngineError> {
        match symbol.to_ascii_uppercase() {
            'R' => Ok(Move::Rock),
            'P' => Ok(Move::Paper),
            'S' => Ok(Move::Scissors),
            _ => Err(EngineError::InvalidMove(symbol.to_string())),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }
}

impl core::fmt::Display for Move {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    /// Accepts `R`/`P`/`S` or the full name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Move::from_symbol(c).map_err(|_| EngineError::InvalidMove(s.to_string()));
        }
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::InvalidMove(s.to_string()))
    }
}

impl TryFrom<u8> for Move {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidMove(value.to_string()))
    }
}

/// Result of a round from the player's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "Player wins",
            Outcome::ComputerWin => "Computer wins",
            Outcome::Tie => "Tie",
        }
    }
}
