//! Player ship, meteors and bullets
//!
//! Positions are sprite top-left corners in screen space (y grows downward).
//! Rotations are radians, clockwise, applied about the sprite center.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::timer::Timer;
use super::tick::TickInput;
use crate::assets::{MeteorSprites, Sprite};
use crate::consts::*;
use crate::settings::Settings;
use crate::{heading_vector, polar_to_cartesian};

/// Capabilities shared by everything the world draws and collides
pub trait Entity {
    /// Top-left corner of the sprite
    fn position(&self) -> Vec2;

    fn sprite(&self) -> &Sprite;

    /// Rotation about the sprite center (radians, clockwise)
    fn rotation(&self) -> f32;

    /// Sprite footprint at the current position, rotation ignored
    fn collider(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.sprite().size())
    }

    fn center(&self) -> Vec2 {
        self.position() + self.sprite().half_extents()
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub rotation: f32,
    pub fire_cooldown: Timer,
    sprite: Sprite,
}

impl Player {
    /// Fresh ship centered on screen, pointing up, weapon cooling down
    pub fn new(settings: &Settings, sprite: Sprite) -> Self {
        Self {
            position: Self::start_position(settings, &sprite),
            rotation: 0.0,
            fire_cooldown: Timer::from_millis(settings.fire_cooldown_ms, settings.ticks_per_second),
            sprite,
        }
    }

    /// Canonical spawn point: sprite centered on the screen
    pub fn start_position(settings: &Settings, sprite: &Sprite) -> Vec2 {
        settings.screen_center() - sprite.half_extents()
    }

    /// Muzzle position: ship center pushed out along the heading
    pub fn nose(&self) -> Vec2 {
        self.center() + heading_vector(self.rotation) * BULLET_SPAWN_OFFSET
    }

    /// Apply one tick of input. Returns the bullet fired this tick, if any.
    pub fn update(
        &mut self,
        input: &TickInput,
        settings: &Settings,
        bullet_sprite: Sprite,
    ) -> Option<Bullet> {
        let turn = settings.turn_per_tick();
        if input.rotate_left {
            self.rotation -= turn;
        }
        if input.rotate_right {
            self.rotation += turn;
        }

        self.fire_cooldown.update();
        if self.fire_cooldown.is_ready() && input.fire {
            self.fire_cooldown.reset();
            return Some(Bullet::new(
                self.nose(),
                self.rotation,
                settings.bullet_speed,
                bullet_sprite,
            ));
        }

        None
    }
}

impl Entity for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// A drifting hazard
#[derive(Debug, Clone)]
pub struct Meteor {
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    pub rotation: f32,
    /// Rotation delta per tick (cosmetic)
    pub spin: f32,
    sprite: Sprite,
}

impl Meteor {
    pub fn new(position: Vec2, velocity: Vec2, spin: f32, sprite: Sprite) -> Self {
        Self {
            position,
            velocity,
            rotation: 0.0,
            spin,
            sprite,
        }
    }

    /// Spawn on the circle around the screen center, heading for the center
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, settings: &Settings, sprites: &MeteorSprites) -> Self {
        let target = settings.screen_center();
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let spawn = target + polar_to_cartesian(settings.spawn_radius(), angle);

        let speed = METEOR_SPEED_MIN + rng.random::<f32>() * (METEOR_SPEED_MAX - METEOR_SPEED_MIN);
        let spin = -METEOR_SPIN_MAX + rng.random::<f32>() * (2.0 * METEOR_SPIN_MAX);

        // Spawn radius is validated positive, so the direction is never zero
        let velocity = (target - spawn).normalize() * speed;

        Self::new(spawn, velocity, spin, sprites.choose(rng))
    }

    pub fn update(&mut self) {
        self.position += self.velocity;
        self.rotation += self.spin;
    }

    /// True once the meteor has crossed its target and drifted back out past
    /// the spawn circle by more than its own size
    pub fn has_escaped(&self, settings: &Settings) -> bool {
        let from_target = self.position - settings.screen_center();
        let receding = from_target.dot(self.velocity) > 0.0;
        let margin = self.sprite.size().length();
        receding && from_target.length() > settings.spawn_radius() + margin
    }
}

impl Entity for Meteor {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// A projectile on a fixed heading
#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Vec2,
    pub heading: f32,
    /// Units per second
    pub speed: f32,
    sprite: Sprite,
}

impl Bullet {
    /// Bullet whose sprite is centered on `center`
    pub fn new(center: Vec2, heading: f32, speed: f32, sprite: Sprite) -> Self {
        Self {
            position: center - sprite.half_extents(),
            heading,
            speed,
            sprite,
        }
    }

    pub fn update(&mut self, ticks_per_second: u32) {
        let step = self.speed / ticks_per_second as f32;
        self.position += heading_vector(self.heading) * step;
    }
}

impl Entity for Bullet {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn rotation(&self) -> f32 {
        self.heading
    }
}
