use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Rock Paper Scissors against the computer", long_about = None)]
pub struct Args {
    /// Seed for a reproducible session (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Auto-play this many rounds with random player moves instead of prompting
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Print each round as a JSON object
    #[arg(long)]
    pub json: bool,
}
