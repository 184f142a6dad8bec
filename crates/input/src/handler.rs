//! Press/release tracking that turns key events into intent changes.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a held drop intent whose key has not been seen again (press or auto-repeat)
//! within the timeout is released.
//!
//! Lateral moves are pulses: each press or auto-repeat sets the intent for a
//! single engine step, and [`IntentHandler::finish_step`] clears it again. A
//! tap moves one column; a held key keeps moving at the terminal's repeat rate.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::{map_key, KeyLayout, Player};
use crate::types::Intent;

/// One intent to set or clear on one player's engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentChange {
    pub player: Player,
    pub intent: Intent,
    pub active: bool,
}

impl IntentChange {
    pub fn press(player: Player, intent: Intent) -> Self {
        Self {
            player,
            intent,
            active: true,
        }
    }

    pub fn release(player: Player, intent: Intent) -> Self {
        Self {
            player,
            intent,
            active: false,
        }
    }
}

/// Upper bound on simultaneously held intents (2 drop kinds x 2 players)
const MAX_HELD: usize = 4;

/// Lateral intents of both players
const MAX_PULSED: usize = 4;

pub type IntentChanges = ArrayVec<IntentChange, { MAX_HELD + MAX_PULSED }>;

#[derive(Debug, Clone, Copy)]
struct Held {
    player: Player,
    intent: Intent,
    last_seen: Instant,
}

// A terminal's auto-repeat re-sends the press well inside this window, so a
// physically held key stays held.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held keys for one keyboard layout.
#[derive(Debug, Clone)]
pub struct IntentHandler {
    layout: KeyLayout,
    held: ArrayVec<Held, MAX_HELD>,
    /// Lateral intents set since the last finished step
    pulsed: ArrayVec<(Player, Intent), MAX_PULSED>,
    key_release_timeout_ms: u32,
}

fn is_lateral(intent: Intent) -> bool {
    matches!(intent, Intent::MoveLeft | Intent::MoveRight)
}

impl IntentHandler {
    pub fn new(layout: KeyLayout) -> Self {
        Self {
            layout,
            held: ArrayVec::new(),
            pulsed: ArrayVec::new(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn layout(&self) -> KeyLayout {
        self.layout
    }

    /// Whether `player` currently holds `intent`
    pub fn is_held(&self, player: Player, intent: Intent) -> bool {
        self.held
            .iter()
            .any(|h| h.player == player && h.intent == intent)
    }

    /// A key went down (or auto-repeated).
    ///
    /// Rotations and lateral moves fire on every press. Drop intents fire
    /// once and then only refresh their timeout while the key keeps arriving.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<IntentChange> {
        let (player, intent) = map_key(self.layout, code)?;

        if !intent.is_held() {
            return Some(IntentChange::press(player, intent));
        }

        if is_lateral(intent) {
            if !self.pulsed.contains(&(player, intent)) {
                let _ = self.pulsed.try_push((player, intent));
            }
            return Some(IntentChange::press(player, intent));
        }

        let now = Instant::now();
        if let Some(held) = self
            .held
            .iter_mut()
            .find(|h| h.player == player && h.intent == intent)
        {
            held.last_seen = now;
            return None;
        }

        let _ = self.held.try_push(Held {
            player,
            intent,
            last_seen: now,
        });
        Some(IntentChange::press(player, intent))
    }

    /// A key went up. Rotations and lateral pulses have nothing to release.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<IntentChange> {
        let (player, intent) = map_key(self.layout, code)?;
        let pos = self
            .held
            .iter()
            .position(|h| h.player == player && h.intent == intent)?;
        self.held.remove(pos);
        Some(IntentChange::release(player, intent))
    }

    /// Release every held intent whose key has gone quiet.
    pub fn update(&mut self) -> IntentChanges {
        self.expire(Instant::now())
    }

    fn expire(&mut self, now: Instant) -> IntentChanges {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        let mut released = IntentChanges::new();

        self.held.retain(|h| {
            let stale = now.saturating_duration_since(h.last_seen) > timeout;
            if stale {
                released.push(IntentChange::release(h.player, h.intent));
            }
            !stale
        });

        released
    }

    /// Clear the lateral pulses the engines just consumed.
    ///
    /// Call once after every engine step.
    pub fn finish_step(&mut self) -> IntentChanges {
        self.pulsed
            .drain(..)
            .map(|(player, intent)| IntentChange::release(player, intent))
            .collect()
    }

    /// Release everything (leaving a game, switching layouts).
    pub fn reset(&mut self) -> IntentChanges {
        let mut released = self.finish_step();
        released.extend(
            self.held
                .drain(..)
                .map(|h| IntentChange::release(h.player, h.intent)),
        );
        released
    }
}
