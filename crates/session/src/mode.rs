//! Game modes: one board, or two boards sharing a keyboard.

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::core::{ConfigError, Engine, EngineConfig, EngineSnapshot};
use crate::events::EventLog;
use crate::input::{IntentChange, IntentHandler, KeyLayout, Player};

/// Added to the configured seed for player two so the boards differ
pub const PLAYER_TWO_SEED_OFFSET: u32 = 0x9E37_79B9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

impl GameMode {
    /// Parse from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" | "sp" | "1" => Some(GameMode::SinglePlayer),
            "two" | "mp" | "2" => Some(GameMode::TwoPlayer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "single",
            GameMode::TwoPlayer => "two",
        }
    }

    pub fn player_count(&self) -> usize {
        match self {
            GameMode::SinglePlayer => 1,
            GameMode::TwoPlayer => 2,
        }
    }

    pub fn layout(&self) -> KeyLayout {
        match self {
            GameMode::SinglePlayer => KeyLayout::Single,
            GameMode::TwoPlayer => KeyLayout::Dual,
        }
    }

    /// Side panel labels, one per board
    pub fn titles(&self) -> &'static [&'static str] {
        match self {
            GameMode::SinglePlayer => &[],
            GameMode::TwoPlayer => &["PLAYER 1", "PLAYER 2"],
        }
    }
}

/// A running game: one engine per player plus the key tracking that feeds them
#[derive(Debug)]
pub struct Game {
    mode: GameMode,
    engines: Vec<Engine>,
    input: IntentHandler,
}

impl Game {
    pub fn new(mode: GameMode, config: EngineConfig) -> Result<Self, ConfigError> {
        let mut engines = Vec::with_capacity(mode.player_count());
        engines.push(Engine::with_config(config)?);
        if mode == GameMode::TwoPlayer {
            let seed = config.seed.wrapping_add(PLAYER_TWO_SEED_OFFSET);
            engines.push(Engine::with_config(config.with_seed(seed))?);
        }

        Ok(Self {
            mode,
            engines,
            input: IntentHandler::new(mode.layout()),
        })
    }

    /// Replace the key tracker (custom release timeout).
    pub fn with_input(mut self, input: IntentHandler) -> Self {
        self.input = input;
        self
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn engines(&self) -> &[Engine] {
        &self.engines
    }

    pub fn engine(&self, player: Player) -> Option<&Engine> {
        self.engines.get(player.index())
    }

    /// Route an intent change to its player's engine
    ///
    /// Changes for a player this mode does not have are dropped.
    pub fn apply(&mut self, change: IntentChange) {
        if let Some(engine) = self.engines.get_mut(change.player.index()) {
            engine.set_intent(change.intent, change.active);
        }
    }

    /// Feed a key event through the layout's intent handler
    pub fn handle_key(&mut self, key: KeyEvent) {
        let change = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.input.handle_key_press(key.code),
            KeyEventKind::Release => self.input.handle_key_release(key.code),
        };
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Release timed-out keys, advance every engine once, collect locks, then
    /// end the lateral pulses that step consumed
    pub fn update(&mut self, log: &mut EventLog) {
        for change in self.input.update() {
            self.apply(change);
        }

        for (i, engine) in self.engines.iter_mut().enumerate() {
            engine.update();
            if let Some(event) = engine.take_last_event() {
                let player = if i == 0 { Player::One } else { Player::Two };
                debug!(
                    player = player.as_str(),
                    lines = event.lines_cleared,
                    game_over = event.game_over,
                    "lock"
                );
                log.record(player, event);
            }
        }

        for change in self.input.finish_step() {
            self.apply(change);
        }
    }

    /// Release every held key, e.g. when leaving the game
    pub fn release_all(&mut self) {
        for change in self.input.reset() {
            self.apply(change);
        }
    }

    /// Every board has stopped
    pub fn is_over(&self) -> bool {
        self.engines.iter().all(|e| !e.is_running())
    }

    pub fn snapshots(&self) -> Vec<EngineSnapshot> {
        self.engines.iter().map(Engine::snapshot).collect()
    }
}
