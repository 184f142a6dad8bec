//! Owned stack of screens; the top one receives input, updates and renders.

use tracing::info;

use crate::screen::{Screen, Transition};

#[derive(Debug, Default)]
pub struct StateStack {
    screens: Vec<Screen>,
    changed: bool,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack holding just `screen`
    pub fn with_root(screen: Screen) -> Self {
        let mut stack = Self::new();
        stack.push(screen);
        stack
    }

    pub fn push(&mut self, screen: Screen) {
        info!(screen = screen.name(), depth = self.screens.len() + 1, "push screen");
        self.screens.push(screen);
        self.changed = true;
    }

    pub fn pop(&mut self) -> Option<Screen> {
        let screen = self.screens.pop()?;
        info!(screen = screen.name(), depth = self.screens.len(), "pop screen");
        self.changed = true;
        Some(screen)
    }

    pub fn top(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Whether the top screen changed since the last call; reading resets it
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Carry out a transition returned by the top screen
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Push(screen) => self.push(*screen),
            Transition::Pop => {
                self.pop();
            }
            Transition::Quit => {
                info!(depth = self.screens.len(), "quit");
                self.screens.clear();
                self.changed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::mode::GameMode;

    fn game() -> Screen {
        Screen::running(GameMode::SinglePlayer, EngineConfig::default()).unwrap()
    }

    #[test]
    fn push_pop_and_top() {
        let mut stack = StateStack::with_root(Screen::Menu);
        assert_eq!(stack.top().map(Screen::name), Some("menu"));

        stack.push(game());
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top().map(Screen::name), Some("single player"));

        assert!(stack.pop().is_some());
        assert_eq!(stack.top().map(Screen::name), Some("menu"));
        assert!(stack.pop().is_some());
        assert!(stack.is_empty());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn changed_flag_is_read_once() {
        let mut stack = StateStack::new();
        assert!(!stack.take_changed());

        stack.push(Screen::Menu);
        assert!(stack.take_changed());
        assert!(!stack.take_changed());

        stack.pop();
        assert!(stack.take_changed());
    }

    #[test]
    fn apply_transitions() {
        let mut stack = StateStack::with_root(Screen::Menu);
        stack.take_changed();

        stack.apply(Transition::None);
        assert!(!stack.take_changed());

        stack.apply(Transition::Push(Box::new(game())));
        assert_eq!(stack.len(), 2);

        stack.apply(Transition::Pop);
        assert_eq!(stack.len(), 1);

        stack.apply(Transition::Push(Box::new(game())));
        stack.apply(Transition::Quit);
        assert!(stack.is_empty());
        assert!(stack.take_changed());
    }

    #[test]
    fn top_mut_reaches_the_running_game() {
        let mut stack = StateStack::with_root(Screen::Menu);
        stack.push(game());
        assert!(matches!(stack.top_mut(), Some(Screen::Running(_))));
    }
}
