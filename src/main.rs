mod canvas;
mod config;
mod game;
mod input;
mod leaderboard;
mod name_prompt;
mod screens;
mod session;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

const LOG_FILE: &str = "snake.log";
const TITLE: &str = "Snake Game";

fn main() -> Result<()> {
    init_logging();

    let config = config::GameConfig::default();
    let mut term = term::TermManager::new(&config).context("Failed to read terminal size")?;
    let mut game = game::SnakeGame::new(config, StdRng::from_entropy());

    if let Err(e) = term.setup(TITLE) {
        // Undo whatever part of the setup went through
        let _ = term.restore();
        return Err(e).context("Failed to set up terminal");
    }
    info!("Started");

    let result = game.run(&mut term);
    let restored = term.restore();

    info!("Exited");
    finish(result, restored)
}

/// Reports the loop error first. A restore error is only returned when the
/// loop ended cleanly.
fn finish(result: Result<()>, restored: crossterm::Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            error!("Failed to restore terminal: {}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

/// The screen belongs to the game, so log lines go to a file.
fn init_logging() {
    let file = match File::create(LOG_FILE) {
        Ok(file) => file,
        Err(_) => return,
    };

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
}
