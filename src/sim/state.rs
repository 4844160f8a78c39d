//! World and game state
//!
//! `World` is everything a session owns and is thrown away on death.
//! `GameState` wraps it with what outlives a session: settings, resolved
//! sprites, the RNG stream and counters.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Rect, find_hit_pairs, remove_marked};
use super::entities::{Bullet, Entity, Meteor, Player};
use super::timer::Timer;
use crate::assets::GameAssets;
use crate::error::GameError;
use crate::settings::{ScorePolicy, Settings};

/// Notable things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BulletFired,
    MeteorSpawned,
    /// A bullet destroyed a meteor; carries the score after the hit
    MeteorDestroyed { score: u64 },
    /// A meteor hit the player and the world was reset
    PlayerDestroyed { final_score: u64 },
}

/// One play session: the ship, everything in flight, and the score
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    /// Spawn order
    pub meteors: Vec<Meteor>,
    /// Fire order
    pub bullets: Vec<Bullet>,
    pub spawn_timer: Timer,
    pub score: u64,
}

impl World {
    pub fn new(settings: &Settings, assets: &GameAssets) -> Self {
        Self {
            player: Player::new(settings, assets.player),
            meteors: Vec::new(),
            bullets: Vec::new(),
            spawn_timer: Timer::from_millis(settings.meteor_spawn_ms, settings.ticks_per_second),
            score: 0,
        }
    }

    /// Remove every meteor/bullet pair that overlaps. Returns the pair count.
    pub fn resolve_bullet_hits(&mut self) -> usize {
        let meteor_boxes: Vec<Rect> = self.meteors.iter().map(Entity::collider).collect();
        let bullet_boxes: Vec<Rect> = self.bullets.iter().map(Entity::collider).collect();
        let pairs = find_hit_pairs(&meteor_boxes, &bullet_boxes);
        if pairs.is_empty() {
            return 0;
        }

        let mut dead_meteors = vec![false; self.meteors.len()];
        let mut dead_bullets = vec![false; self.bullets.len()];
        for &(mi, bi) in &pairs {
            dead_meteors[mi] = true;
            dead_bullets[bi] = true;
        }
        remove_marked(&mut self.meteors, &dead_meteors);
        remove_marked(&mut self.bullets, &dead_bullets);

        pairs.len()
    }

    /// First meteor (by spawn order) overlapping the player
    pub fn meteor_hitting_player(&self) -> Option<usize> {
        let ship = self.player.collider();
        self.meteors
            .iter()
            .position(|m| m.collider().intersects(&ship))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub assets: GameAssets,
    pub world: World,
    /// Seed the RNG stream started from
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter (survives resets)
    pub time_ticks: u64,
    /// Number of times the world has been reset
    pub resets: u32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state. Settings are validated here; assets were
    /// validated when they were resolved.
    pub fn new(settings: Settings, assets: GameAssets, seed: u64) -> Result<Self, GameError> {
        settings.validate()?;
        let world = World::new(&settings, &assets);
        log::info!(
            "New game: seed {}, {} ticks/s, spawn every {} ticks",
            seed,
            settings.ticks_per_second,
            world.spawn_timer.target_ticks()
        );
        Ok(Self {
            settings,
            assets,
            world,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            resets: 0,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.world.score
    }

    /// Replace the world wholesale. Score survives only under `ScorePolicy::Persist`.
    pub fn reset(&mut self) {
        let carried = match self.settings.score_policy {
            ScorePolicy::Persist => self.world.score,
            ScorePolicy::ResetOnDeath => 0,
        };
        self.world = World::new(&self.settings, &self.assets);
        self.world.score = carried;
        self.resets += 1;
    }

    /// Spawn one meteor from the state's RNG stream
    pub fn spawn_meteor(&mut self) {
        let meteor = Meteor::spawn(&mut self.rng, &self.settings, &self.assets.meteors);
        log::debug!(
            "Meteor spawned at ({:.1}, {:.1}), speed {:.2}",
            meteor.position.x,
            meteor.position.y,
            meteor.velocity.length()
        );
        self.world.meteors.push(meteor);
    }
}
