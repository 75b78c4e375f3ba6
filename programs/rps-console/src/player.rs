//! Where player moves come from

use anyhow::Result;
use dialoguer::Select;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rps_engine::Move;

pub trait Player {
    /// Next move, or `None` once the player quits.
    fn choose(&mut self) -> Result<Option<Move>>;
}

/// Prompts on the terminal. Mirrors the Rock / Paper / Scissors / Quit buttons.
pub struct Human;

const CHOICES: [&str; 4] = ["Rock", "Paper", "Scissors", "Quit"];

impl Player for Human {
    fn choose(&mut self) -> Result<Option<Move>> {
        let selection = Select::new()
            .with_prompt("Your move")
            .report(false)
            .items(&CHOICES[..])
            .default(0)
            .interact()?;
        match CHOICES[selection] {
            "Quit" => Ok(None),
            name => Ok(Some(name.parse()?)),
        }
    }
}

/// Plays a fixed number of uniformly random moves.
pub struct AutoPlayer {
    rng: StdRng,
    remaining: u32,
}

impl AutoPlayer {
    pub fn new(seed: u64, rounds: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            remaining: rounds,
        }
    }
}

impl Player for AutoPlayer {
    fn choose(&mut self) -> Result<Option<Move>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        let pick: u8 = self.rng.random_range(0..3);
        Ok(Some(Move::try_from(pick)?))
    }
}
