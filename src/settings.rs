//! Game settings
//!
//! Every tunable the simulation reads lives here. Loaded from JSON; any field
//! missing from the file falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// What happens to the score when the player dies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Score starts over from zero with the new world
    #[default]
    ResetOnDeath,
    /// Score carries over into the new world
    Persist,
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed simulation rate supplied by the driver
    pub ticks_per_second: u32,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Pacing ===
    /// Interval between meteor spawns
    pub meteor_spawn_ms: u64,
    /// Minimum interval between shots
    pub fire_cooldown_ms: u64,
    /// Bullet speed (units per second)
    pub bullet_speed: f32,

    // === Rules ===
    pub score_policy: ScorePolicy,
    /// Drop bullets that left the screen and meteors that flew past the target
    pub cull_offscreen: bool,
    /// Apply meteor spin to the drawn sprite (collision ignores it either way)
    pub render_meteor_spin: bool,

    /// Fixed RNG seed; the binary picks one from the clock when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            meteor_spawn_ms: METEOR_SPAWN_MS,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            bullet_speed: BULLET_SPEED,

            score_policy: ScorePolicy::ResetOnDeath,
            cull_offscreen: true,
            render_meteor_spin: true,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.ticks_per_second == 0 {
            return Err(GameError::InvalidSettings(
                "ticks_per_second must be positive".into(),
            ));
        }
        // Meteors spawn on a circle of radius screen_width / 2; a zero radius
        // would put the spawn point on its own target.
        let finite = self.screen_width.is_finite() && self.screen_height.is_finite();
        if !(finite && self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.bullet_speed > 0.0) {
            return Err(GameError::InvalidSettings(
                "bullet_speed must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Center of the play area
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Radius of the circle meteors spawn on
    pub fn spawn_radius(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// Player turn rate (radians per tick): half a turn per second
    pub fn turn_per_tick(&self) -> f32 {
        std::f32::consts::PI / self.ticks_per_second as f32
    }
}
