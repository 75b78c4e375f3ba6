//! Terminal formatting

use colored::Colorize;
use rps_engine::{HistoryTracker, Move, Outcome, RoundResult, SessionTotals};

pub fn banner() -> String {
    format!("{}", "Rock Paper Scissors Game".bold())
}

/// The game log line, coloured by who won
pub fn round(result: &RoundResult) -> String {
    let line = result.log_line();
    match result.outcome {
        Outcome::PlayerWin => line.green().to_string(),
        Outcome::ComputerWin => line.red().to_string(),
        Outcome::Tie => line.yellow().to_string(),
    }
}

pub fn scoreboard(totals: &SessionTotals) -> String {
    format!(
        "Player Wins: {}  Computer Wins: {}  Ties: {}",
        totals.player_wins, totals.computer_wins, totals.ties
    )
}

/// Player move counts, e.g. `R:2 P:1 S:0`
pub fn tally(history: &HistoryTracker) -> String {
    Move::ALL
        .iter()
        .map(|m| format!("{}:{}", m.symbol(), history.count(*m)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn summary(totals: &SessionTotals) -> String {
    format!("{} rounds played. {}", totals.total(), scoreboard(totals))
}
