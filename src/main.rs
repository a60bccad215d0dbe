//! Main entry point for the headless Snake runner.
//!
//! Loads configuration, then plays rounds with the autopilot at the
//! configured frame rate and reports each outcome.
//!
//! Usage: `snake-duel [players]` with `players` 1 (default) or 2.
//! `SNAKE_CONFIG` points at an optional JSON config, `SNAKE_SEED` pins the
//! first round's RNG and `SNAKE_ROUNDS` sets how many rounds to play.

use log::error;

use snake_duel::config::GameConfig;
use snake_duel::game::demo::{run_round, DemoEnd, DemoOptions};
use snake_duel::game::types::RoundOutcome;
use snake_duel::game::GameError;

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

async fn run() -> Result<(), GameError> {
    let config = match std::env::var("SNAKE_CONFIG") {
        Ok(path) => GameConfig::load(path)?,
        Err(_) => GameConfig::default(),
    };
    let players = std::env::args().nth(1).and_then(|arg| arg.parse().ok()).unwrap_or(1);
    let rounds: u32 = env_parse("SNAKE_ROUNDS").unwrap_or(1);

    let mut options = DemoOptions {
        players,
        seed: env_parse("SNAKE_SEED"),
        ..DemoOptions::default()
    };

    for _ in 0..rounds {
        match run_round(&config, &options, || None).await? {
            DemoEnd::Finished(RoundOutcome::Score(score)) => println!("Score: {}", score),
            DemoEnd::Finished(RoundOutcome::Winner(id)) => {
                let name = config
                    .spawns
                    .iter()
                    .find(|spawn| spawn.id == id)
                    .map_or_else(|| id.to_string(), |spawn| spawn.name.clone());
                println!("{} won", name);
            }
            DemoEnd::Quit | DemoEnd::TickLimit => break,
        }
        // Later rounds are fresh; only the first one honours SNAKE_SEED.
        options.seed = None;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
