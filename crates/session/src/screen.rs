//! Screens that can sit on the state stack.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::core::EngineConfig;
use crate::events::EventLog;
use crate::input::{is_back, should_quit};
use crate::mode::{Game, GameMode};

/// What the driver should do with the stack after a key
#[derive(Debug)]
pub enum Transition {
    None,
    Push(Box<Screen>),
    Pop,
    Quit,
}

#[derive(Debug)]
pub enum Screen {
    Menu,
    Running(Game),
}

impl Screen {
    /// A running game, or `None` (with a warning) when the config is unusable
    pub fn running(mode: GameMode, config: EngineConfig) -> Option<Self> {
        match Game::new(mode, config) {
            Ok(game) => Some(Screen::Running(game)),
            Err(err) => {
                warn!(mode = mode.as_str(), %err, "cannot start game");
                None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Running(game) => match game.mode() {
                GameMode::SinglePlayer => "single player",
                GameMode::TwoPlayer => "two player",
            },
        }
    }

    /// One fixed step. The menu has nothing to advance.
    pub fn update(&mut self, log: &mut EventLog) {
        if let Screen::Running(game) = self {
            game.update(log);
        }
    }

    /// React to a key event; `config` builds games started from the menu
    pub fn handle_key(&mut self, key: KeyEvent, config: &EngineConfig) -> Transition {
        let pressed = key.kind != KeyEventKind::Release;
        if pressed && should_quit(key) {
            return Transition::Quit;
        }
        if pressed && is_back(key) {
            if let Screen::Running(game) = self {
                game.release_all();
            }
            return Transition::Pop;
        }

        match self {
            Screen::Menu => {
                if key.kind != KeyEventKind::Press {
                    return Transition::None;
                }
                let mode = match key.code {
                    KeyCode::Char('p') | KeyCode::Char('P') => GameMode::SinglePlayer,
                    KeyCode::Char('m') | KeyCode::Char('M') => GameMode::TwoPlayer,
                    _ => return Transition::None,
                };
                Screen::running(mode, *config)
                    .map(|screen| Transition::Push(Box::new(screen)))
                    .unwrap_or(Transition::None)
            }
            Screen::Running(game) => {
                game.handle_key(key);
                Transition::None
            }
        }
    }
}
