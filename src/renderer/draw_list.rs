//! Recording renderer
//!
//! Captures draw calls instead of compositing them. Used by the headless
//! binary and tests, and as a command buffer a real backend can replay.

use glam::Vec2;

use super::Renderer;
use crate::assets::{Sprite, SpriteHandle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        handle: SpriteHandle,
        translation: Vec2,
        rotation: f32,
    },
    Text {
        text: String,
        position: Vec2,
    },
}

/// Ordered list of draw calls for one or more frames
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded calls, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn sprite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }
}

impl Renderer for DrawList {
    fn draw_sprite(&mut self, sprite: &Sprite, translation: Vec2, rotation: f32) {
        self.commands.push(DrawCommand::Sprite {
            handle: sprite.handle,
            translation,
            rotation,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
        });
    }
}
