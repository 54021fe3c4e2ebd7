//! Standalone bot-vs-bot series runner.
//!
//! Run with:
//! `cargo run --release --bin bot_match_series`
//! `cargo run --release --bin bot_match_series -- --verbose`

use plum_checkers::engines::engine_greedy::GreedyBot;
use plum_checkers::engines::engine_random::RandomBot;
use plum_checkers::engines::engine_trait::Bot;
use plum_checkers::utils::match_harness::{
    play_bot_match_series, MatchConfig, MatchSeriesConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Swap these to pit other bots against each other.
    let player1 = || Box::new(GreedyBot::new()) as Box<dyn Bot>;
    let player2 = || Box::new(RandomBot::new()) as Box<dyn Bot>;

    let stats = play_bot_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 20,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 0,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )
    .map_err(|e| e.to_string())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
