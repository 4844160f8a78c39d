//! Meteors - a single-screen meteor shooter simulation core
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (timers, entities, collisions, game state)
//! - `renderer`: Draw contract and the read-only draw pass
//! - `platform`: Input sampling and the fixed-step loop driver
//! - `assets`: Sprite provider contract and footprint lookup
//! - `settings`: Data-driven configuration

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetProvider, GameAssets, Sprite, SpriteAtlas, SpriteHandle};
pub use error::GameError;
pub use settings::{ScorePolicy, Settings};

use glam::Vec2;

/// 2D point/direction used throughout the simulation
pub type Vector = Vec2;

/// Game configuration constants
pub mod consts {
    /// Default simulation rate (ticks per second)
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will try to catch up on (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Meteor pacing
    pub const METEOR_SPAWN_MS: u64 = 1000;
    pub const METEOR_SPEED_MIN: f32 = 0.25;
    pub const METEOR_SPEED_MAX: f32 = 1.75;
    /// Cosmetic spin range (radians per tick, symmetric around zero)
    pub const METEOR_SPIN_MAX: f32 = 0.02;

    /// Weapon
    pub const FIRE_COOLDOWN_MS: u64 = 500;
    pub const BULLET_SPEED: f32 = 350.0;
    /// Distance from ship center to the muzzle along the heading
    pub const BULLET_SPAWN_OFFSET: f32 = 50.0;

    /// Score overlay, offset left from screen center
    pub const SCORE_OFFSET_X: f32 = 100.0;
    pub const SCORE_Y: f32 = 50.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit direction for a screen-space heading.
///
/// Heading 0 points up (negative y); increasing heading turns clockwise.
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}
