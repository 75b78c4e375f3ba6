//! Rock Paper Scissors - terminal front end
//!
//! Plays rounds against the engine's strategy-driven computer opponent,
//! either interactively or as a scripted demo.

mod cli;
mod player;
mod render;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use rps_engine::{GameSession, SeededRng};

use cli::Args;
use player::{AutoPlayer, Human, Player};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("session seed {}", seed);

    let mut session = GameSession::new(SeededRng::from_u64(seed));
    let mut out = std::io::stdout().lock();
    match args.rounds {
        Some(rounds) => run(&mut session, &mut AutoPlayer::new(seed, rounds), args.json, &mut out),
        None => run(&mut session, &mut Human, args.json, &mut out),
    }
}

fn run<P: Player, W: Write>(
    session: &mut GameSession<SeededRng>,
    player: &mut P,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if !json {
        writeln!(out, "{}", render::banner())?;
    }
    while let Some(m) = player.choose()? {
        let result = session.play_round(m);
        if json {
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else {
            writeln!(out, "{}", render::round(&result))?;
            writeln!(out, "{}", render::scoreboard(&session.totals()))?;
            writeln!(out, "{}", render::tally(session.history()))?;
        }
    }
    if !json {
        writeln!(out, "{}", render::summary(&session.totals()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_engine::RoundResult;

    fn play(rounds: u32, json: bool) -> (GameSession<SeededRng>, String) {
        colored::control::set_override(false);
        let mut session = GameSession::new(SeededRng::from_u64(11));
        let mut out = Vec::new();
        run(&mut session, &mut AutoPlayer::new(11, rounds), json, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_zero_rounds_prints_banner_and_summary() {
        let (session, text) = play(0, false);
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(
            text,
            "Rock Paper Scissors Game\n0 rounds played. Player Wins: 0  Computer Wins: 0  Ties: 0\n"
        );
    }

    #[test]
    fn test_text_output_per_round() {
        let (session, text) = play(2, false);
        assert_eq!(session.rounds_played(), 2);
        let lines: Vec<&str> = text.lines().collect();
        // banner, three lines per round, summary
        assert_eq!(lines.len(), 1 + 2 * 3 + 1);
        assert!(lines[1].contains("(Computer: "));
        assert!(lines[2].starts_with("Player Wins: "));
        assert!(lines[3].starts_with("R:"));
        assert!(lines[7].starts_with("2 rounds played."));
    }

    #[test]
    fn test_json_output_per_round() {
        let (session, text) = play(2, true);
        let results: Vec<RoundResult> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(results.len(), 2);
        let player_wins = results
            .iter()
            .filter(|r| r.outcome == rps_engine::Outcome::PlayerWin)
            .count() as u32;
        assert_eq!(player_wins, session.totals().player_wins);
        assert_eq!(session.history().total(), 2);
    }
}
