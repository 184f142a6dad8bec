//! Key mapping from terminal events to engine intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which board a key drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Zero-based index, for per-player arrays
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "player1",
            Player::Two => "player2",
        }
    }
}

/// Keyboard layout for the running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyLayout {
    /// One board: arrows, space, `z` / `x`
    Single,
    /// Two boards sharing one keyboard
    Dual,
}

/// Map a key to the player it belongs to and the intent it sets.
pub fn map_key(layout: KeyLayout, code: KeyCode) -> Option<(Player, Intent)> {
    match layout {
        KeyLayout::Single => map_single(code).map(|intent| (Player::One, intent)),
        KeyLayout::Dual => map_dual(code),
    }
}

fn map_single(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Left => Some(Intent::MoveLeft),
        KeyCode::Right => Some(Intent::MoveRight),
        KeyCode::Down => Some(Intent::SoftDrop),
        KeyCode::Char(' ') => Some(Intent::HardDrop),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Intent::RotateRight),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::RotateLeft),
        _ => None,
    }
}

fn map_dual(code: KeyCode) -> Option<(Player, Intent)> {
    let mapped = match code {
        // Player one
        KeyCode::Left => (Player::One, Intent::MoveLeft),
        KeyCode::Right => (Player::One, Intent::MoveRight),
        KeyCode::Down => (Player::One, Intent::SoftDrop),
        KeyCode::Char('.') => (Player::One, Intent::RotateRight),
        KeyCode::Char(',') => (Player::One, Intent::RotateLeft),

        // Player two
        KeyCode::Char('a') | KeyCode::Char('A') => (Player::Two, Intent::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => (Player::Two, Intent::MoveRight),
        KeyCode::Char('s') | KeyCode::Char('S') => (Player::Two, Intent::SoftDrop),
        KeyCode::Char('1') => (Player::Two, Intent::RotateRight),
        KeyCode::Char('2') => (Player::Two, Intent::RotateLeft),

        _ => return None,
    };
    Some(mapped)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key leaves the running game for the menu.
pub fn is_back(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}
