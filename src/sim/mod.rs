//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (rate injected through `Settings`)
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Rect, find_hit_pairs};
pub use entities::{Bullet, Entity, Meteor, Player};
pub use state::{GameEvent, GameState, World};
pub use tick::{TickInput, tick};
pub use timer::Timer;
