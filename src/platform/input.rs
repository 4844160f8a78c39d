//! Input sampling
//!
//! The simulation sees three held/not-held signals per tick. There is no
//! event queue or key repeat.

use crate::sim::TickInput;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Fire,
}

/// Anything that can answer "is this action held right now"
pub trait InputProvider {
    fn is_pressed(&self, action: Action) -> bool;
}

impl TickInput {
    /// Sample every action once
    pub fn sample(provider: &impl InputProvider) -> Self {
        Self {
            rotate_left: provider.is_pressed(Action::RotateLeft),
            rotate_right: provider.is_pressed(Action::RotateRight),
            fire: provider.is_pressed(Action::Fire),
        }
    }
}

/// In-memory held-key state
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    rotate_left: bool,
    rotate_right: bool,
    fire: bool,
}

impl KeyState {
    fn slot(&mut self, action: Action) -> &mut bool {
        match action {
            Action::RotateLeft => &mut self.rotate_left,
            Action::RotateRight => &mut self.rotate_right,
            Action::Fire => &mut self.fire,
        }
    }

    pub fn press(&mut self, action: Action) {
        *self.slot(action) = true;
    }

    pub fn release(&mut self, action: Action) {
        *self.slot(action) = false;
    }

    pub fn set(&mut self, action: Action, held: bool) {
        *self.slot(action) = held;
    }
}

impl InputProvider for KeyState {
    fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::RotateLeft => self.rotate_left,
            Action::RotateRight => self.rotate_right,
            Action::Fire => self.fire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reads_each_action() {
        let mut keys = KeyState::default();
        keys.press(Action::RotateRight);
        keys.press(Action::Fire);
        assert_eq!(
            TickInput::sample(&keys),
            TickInput {
                rotate_left: false,
                rotate_right: true,
                fire: true,
            }
        );

        keys.release(Action::Fire);
        keys.set(Action::RotateLeft, true);
        let input = TickInput::sample(&keys);
        assert!(input.rotate_left && input.rotate_right && !input.fire);
    }
}
