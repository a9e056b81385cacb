//! Jokerball in the terminal.

use std::io::{self, BufRead};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jokerball_core::{GameState, ObservedGame};

mod command;
mod config;
mod render;

use command::Command;
use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let state = match config.seed {
        Some(seed) => GameState::with_seed(seed)?,
        None => GameState::new()?,
    };
    info!(seed = state.seed(), "Starting Jokerball match");

    let mut game = ObservedGame::new(state);
    game.register(|snapshot| println!("{}", render::render(snapshot)));
    game.start();
    println!("{}", command::HELP);

    for line in io::stdin().lock().lines() {
        let line = line?;
        match command::parse_command(&line) {
            Some(Command::Action(action)) => match game.apply_action(action) {
                Ok(events) => {
                    for event in events {
                        debug!(?event, "game event");
                    }
                }
                Err(e) => warn!("Rejected {:?}: {}", action, e),
            },
            Some(Command::Json) => {
                println!("{}", serde_json::to_string_pretty(&game.game().snapshot())?);
            }
            Some(Command::Quit) => break,
            Some(Command::Help) | None => println!("{}", command::HELP),
        }
    }

    info!(turns = game.game().turn_number(), "Leaving Jokerball");
    Ok(())
}
