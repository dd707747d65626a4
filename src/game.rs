use std::time::Instant;

use crate::canvas::Canvas;
use crate::config::GameConfig;
use crate::input::{self, Command, KeyContext};
use crate::leaderboard::{Leaderboard, LeaderboardStore};
use crate::name_prompt::NamePrompt;
use crate::screens;
use crate::session::{GameSession, TickResult};
use crate::term::TermManager;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub enum State {
    Intro,
    Playing(GameSession),
    /// The name prompt is shown until the score is submitted, then the
    /// player picks between playing again and quitting.
    GameOver { score: u32, prompt: Option<NamePrompt> },
    Leaderboard(Leaderboard),
    Terminated,
}

pub struct SnakeGame {
    config: GameConfig,
    store: LeaderboardStore,
    state: State,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let store = LeaderboardStore::new(config.leaderboard_path.clone());
        info!("Leaderboard file: {}", store.path().display());
        SnakeGame { config, store, state: State::Intro, rng }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, State::Terminated)
    }

    pub fn key_context(&self) -> KeyContext {
        match &self.state {
            State::Intro | State::Terminated => KeyContext::Menu,
            State::Playing(_) => KeyContext::Playing,
            State::GameOver { prompt: Some(_), .. } => KeyContext::TextEntry,
            State::GameOver { prompt: None, .. } => KeyContext::GameOver,
            State::Leaderboard(_) => KeyContext::Leaderboard,
        }
    }

    /// Applies one command to the current state. Commands with no meaning
    /// in the current state are ignored.
    pub fn handle(&mut self, command: Command) {
        if command == Command::Quit {
            info!("Quit requested");
            self.state = State::Terminated;
            return;
        }

        let next = match &mut self.state {
            State::Intro => match command {
                Command::StartGame => Some(State::Playing(new_session(&self.config, &mut self.rng))),
                Command::ShowLeaderboard => Some(State::Leaderboard(self.store.load())),
                _ => None,
            },
            State::Playing(session) => {
                if let Some(direction) = command.direction() {
                    if !session.steer(direction) {
                        debug!("Ignored turn {:?} while heading {:?}", direction, session.direction());
                    }
                }
                None
            }
            State::GameOver { score, prompt: Some(prompt) } => match command {
                Command::Character(c) => {
                    prompt.push(c);
                    None
                }
                Command::Backspace => {
                    prompt.backspace();
                    None
                }
                Command::Confirm => {
                    let name = prompt.clone().commit();
                    self.store.submit(&name, *score);
                    Some(State::GameOver { score: *score, prompt: None })
                }
                _ => None,
            },
            State::GameOver { prompt: None, .. } => match command {
                Command::RestartGame => Some(State::Playing(new_session(&self.config, &mut self.rng))),
                _ => None,
            },
            State::Leaderboard(_) => match command {
                Command::BackToMenu => Some(State::Intro),
                _ => None,
            },
            State::Terminated => None,
        };

        if let Some(state) = next {
            self.state = state;
        }
    }

    /// Advances the running session by one step.
    pub fn tick(&mut self) {
        if let State::Playing(session) = &mut self.state {
            let result = session.tick();
            if session.is_terminated() {
                let score = session.score();
                self.state = State::GameOver { score, prompt: Some(NamePrompt::new()) };
            } else if result == (TickResult::Moved { ate_food: true }) {
                debug!("Score is now {}", session.score());
            }
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> crossterm::Result<()> {
        screens::draw(canvas, &self.state, &self.config)
    }

    /// Polls input, steps the simulation when a tick is due and redraws,
    /// until the player quits.
    pub fn run(&mut self, term: &mut TermManager) -> Result<()> {
        let interval = self.config.tick_interval();
        let mut next_tick = Instant::now() + interval;

        while !self.is_terminated() {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            for key_ev in term.read_key_events(timeout).context("Failed to read input")? {
                if let Some(command) = input::translate(key_ev, self.key_context()) {
                    self.handle(command);
                }
                if self.is_terminated() {
                    return Ok(());
                }
            }

            let now = Instant::now();
            if now >= next_tick {
                self.tick();
                next_tick += interval;
                if next_tick < now {
                    // Fell behind, skip the missed ticks
                    next_tick = now + interval;
                }
            }

            self.draw(term).context("Failed to draw frame")?;
        }

        Ok(())
    }
}

fn new_session(config: &GameConfig, rng: &mut StdRng) -> GameSession {
    GameSession::new(config.clone(), StdRng::seed_from_u64(rng.gen()))
}
