//! Platform abstraction layer
//!
//! Handles what sits between the simulation and the host:
//! - Input sampling (once per tick)
//! - Fixed-step timing against a variable frame clock
//! - The loop driver tying update and draw together

pub mod input;
pub mod time;

pub use input::{Action, InputProvider, KeyState};
pub use time::FixedTimestep;

use crate::renderer::{self, Renderer};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Drives the simulation from frame callbacks: N ticks, then one draw
pub struct GameLoop {
    pub state: GameState,
    timestep: FixedTimestep,
    /// Events from every tick run by the last frame
    frame_events: Vec<GameEvent>,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        let timestep = FixedTimestep::new(state.settings.ticks_per_second);
        Self {
            state,
            timestep,
            frame_events: Vec::new(),
        }
    }

    /// Run the ticks owed for `frame_dt` seconds, then draw once.
    /// Returns the number of ticks run.
    pub fn frame(
        &mut self,
        frame_dt: f32,
        input: &impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> u32 {
        let ticks = self.timestep.advance(frame_dt);
        self.frame_events.clear();
        for _ in 0..ticks {
            let sampled = TickInput::sample(input);
            tick(&mut self.state, &sampled);
            self.frame_events.extend_from_slice(&self.state.events);
        }
        renderer::draw(&self.state, renderer);
        ticks
    }

    pub fn frame_events(&self) -> &[GameEvent] {
        &self.frame_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::state::test_support::state;

    #[test]
    fn test_frame_ticks_then_draws() {
        let mut game = GameLoop::new(state());
        let keys = KeyState::default();
        let mut list = DrawList::new();

        let ticks = game.frame(1.0 / 60.0, &keys, &mut list);
        assert_eq!(ticks, 1);
        assert_eq!(game.state.time_ticks, 1);
        // Player + score overlay
        assert_eq!(list.commands().len(), 2);
        assert!(matches!(list.commands()[1], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_one_second_of_frames_spawns_a_meteor() {
        let mut game = GameLoop::new(state());
        let keys = KeyState::default();
        let mut list = DrawList::new();

        let mut total = 0;
        for _ in 0..30 {
            list.clear();
            total += game.frame(1.0 / 30.0, &keys, &mut list);
        }
        assert_eq!(total, 60);
        assert_eq!(game.state.world.meteors.len(), 1);
    }

    #[test]
    fn test_held_fire_reaches_simulation() {
        let mut game = GameLoop::new(state());
        let mut keys = KeyState::default();
        keys.press(Action::Fire);
        let mut list = DrawList::new();

        let mut fired = 0;
        for _ in 0..40 {
            game.frame(1.0 / 60.0, &keys, &mut list);
            fired += game
                .frame_events()
                .iter()
                .filter(|e| **e == GameEvent::BulletFired)
                .count();
        }
        assert_eq!(fired, 1);
        assert_eq!(game.state.world.bullets.len(), 1);
    }
}
