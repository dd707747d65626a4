use crate::snake::Direction;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the game reacts to. Key presses are turned into commands
/// according to the screen being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Backspace,
    Character(char),
    StartGame,
    ShowLeaderboard,
    Quit,
    RestartGame,
    BackToMenu,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Which keymap applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Menu,
    Playing,
    TextEntry,
    GameOver,
    Leaderboard,
}

pub fn translate(key: KeyEvent, context: KeyContext) -> Option<Command> {
    if is_ctrl_c(&key) {
        return Some(Command::Quit);
    }

    if key.code == KeyCode::Esc {
        return Some(Command::Quit);
    }

    match context {
        KeyContext::Menu => match key.code {
            KeyCode::Char(' ') => Some(Command::StartGame),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::ShowLeaderboard),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        },
        KeyContext::Playing => match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Command::Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Command::Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Command::Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Command::Right),
            _ => None,
        },
        KeyContext::TextEntry => match key.code {
            KeyCode::Enter => Some(Command::Confirm),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Char(c) => Some(Command::Character(c)),
            _ => None,
        },
        KeyContext::GameOver => match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::RestartGame),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        },
        KeyContext::Leaderboard => match key.code {
            KeyCode::Char(' ') => Some(Command::BackToMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        },
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
