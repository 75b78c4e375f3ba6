//! Weighted strategy selection
//!
//! Each round draws a number in [1, 100] and maps it onto a fixed band table.
//! Draws are independent; nothing about earlier selections is remembered.

use crate::random::RandomSource;
use crate::strategy::Strategy;

/// Inclusive upper bound of each band, paired with the strategy it selects.
///
/// | Draw   | Share | Strategy  |
/// |--------|-------|-----------|
/// | 1-10   | 10%   | Cheating  |
/// | 11-30  | 20%   | LeastUsed |
/// | 31-50  | 20%   | MostUsed  |
/// | 51-70  | 20%   | LastUsed  |
/// | 71-100 | 30%   | Random    |
pub const STRATEGY_BANDS: [(u8, Strategy); 5] = [
    (10, Strategy::Cheating),
    (30, Strategy::LeastUsed),
    (50, Strategy::MostUsed),
    (70, Strategy::LastUsed),
    (100, Strategy::Random),
];

/// Map a draw in [1, 100] to its strategy. Out-of-range draws are clamped.
pub fn strategy_for_draw(draw: u8) -> Strategy {
    let draw = draw.clamp(1, 100);
    STRATEGY_BANDS
        .iter()
        .find(|(upper, _)| draw <= *upper)
        .map(|(_, strategy)| *strategy)
        .unwrap_or(Strategy::Random)
}

/// Pick the strategy that governs this round.
pub fn select_strategy<R: RandomSource>(rng: &mut R) -> Strategy {
    let draw = rng.next_percent() + 1;
    let strategy = strategy_for_draw(draw);
    log::trace!("selector draw {} -> {}", draw, strategy);
    strategy
}
