//! Lock notices collected from every engine in a game.

use crate::core::LockEvent;
use crate::input::Player;

/// One engine's lock, tagged with the board it happened on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub player: Player,
    pub event: LockEvent,
}

/// Notices produced since the driver last drained them
#[derive(Debug, Default)]
pub struct EventLog {
    notices: Vec<Notice>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, player: Player, event: LockEvent) {
        self.notices.push(Notice { player, event });
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand every pending notice over in recording order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Notice> {
        self.notices.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_in_order() {
        let mut log = EventLog::new();
        log.record(
            Player::Two,
            LockEvent {
                lines_cleared: 1,
                ..LockEvent::default()
            },
        );
        log.record(Player::One, LockEvent::default());
        assert_eq!(log.len(), 2);

        let players: Vec<Player> = log.drain().map(|n| n.player).collect();
        assert_eq!(players, vec![Player::Two, Player::One]);
        assert!(log.is_empty());
    }
}
