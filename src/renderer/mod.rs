//! Rendering contract and the per-frame draw pass
//!
//! The core owns no pixels. Each frame it walks the game state and issues
//! sprite and text calls to whatever backend implements [`Renderer`].

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::assets::Sprite;
use crate::consts::{SCORE_OFFSET_X, SCORE_Y};
use crate::normalize_angle;
use crate::sim::{Entity, GameState};

/// Backend the draw pass talks to
pub trait Renderer {
    /// Composite `sprite` with its top-left corner at `translation`, rotated
    /// by `rotation` radians (clockwise) about the sprite center
    fn draw_sprite(&mut self, sprite: &Sprite, translation: Vec2, rotation: f32);

    /// Draw overlay text with its baseline origin at `position`
    fn draw_text(&mut self, text: &str, position: Vec2);
}

/// Score overlay text (zero-padded to six digits)
pub fn score_text(score: u64) -> String {
    format!("{:06}", score)
}

fn draw_entity(renderer: &mut impl Renderer, entity: &impl Entity, rotation: f32) {
    renderer.draw_sprite(entity.sprite(), entity.position(), normalize_angle(rotation));
}

/// Draw one frame: meteors, then bullets, then the ship, then the score
pub fn draw(state: &GameState, renderer: &mut impl Renderer) {
    let world = &state.world;

    for meteor in &world.meteors {
        let rotation = if state.settings.render_meteor_spin {
            meteor.rotation()
        } else {
            0.0
        };
        draw_entity(renderer, meteor, rotation);
    }

    for bullet in &world.bullets {
        draw_entity(renderer, bullet, bullet.rotation());
    }

    draw_entity(renderer, &world.player, world.player.rotation());

    let score_pos = Vec2::new(state.settings.screen_width / 2.0 - SCORE_OFFSET_X, SCORE_Y);
    renderer.draw_text(&score_text(world.score), score_pos);
}
