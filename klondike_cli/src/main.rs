//! Klondike solitaire in the terminal.
//!
//! Deals a game, then reads commands from standard input until the game is
//! won or the player leaves.

use std::io;

use anyhow::{Context, Result};
use klondike::{Game, GameStatus};
use log::info;
use pico_args::Arguments;

use klondike_cli::{config::CliConfig, repl::Session};

const HELP: &str = "\
Play Klondike solitaire, drawing three cards at a time

USAGE:
  klondike_cli [OPTIONS]

OPTIONS:
  --seed       N           Seed for the shuffle         [default: env KLONDIKE_SEED or random]
  --shuffles   N           Shuffle passes before dealing [default: env KLONDIKE_SHUFFLES or 5]

FLAGS:
  --json                   Print the board as JSON
  -h, --help               Print help information

ENVIRONMENT:
  KLONDIKE_SEED            Shuffle seed
  KLONDIKE_SHUFFLES        Shuffle passes (1-100)
  KLONDIKE_JSON            Set to true for JSON output
  RUST_LOG                 Log filter [default: warn]
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let seed: Option<u64> = pargs
        .opt_value_from_str("--seed")
        .context("--seed expects an unsigned integer")?;
    let shuffles: Option<i32> = pargs
        .opt_value_from_str("--shuffles")
        .context("--shuffles expects an integer")?;
    let json = pargs.contains("--json");

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let config = CliConfig::from_env(seed, shuffles, json)?;
    config.validate()?;
    info!(
        "Dealing with seed {:?} and {} shuffles",
        config.seed, config.shuffles
    );

    let game = Game::from_settings(config.game_settings()).context("Failed to deal a game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock(), config.json);
    match session.run()? {
        GameStatus::Won => info!("Game won"),
        GameStatus::InProgress => info!("Game left in progress"),
    }

    Ok(())
}
