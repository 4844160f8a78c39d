//! Sprite lookup
//!
//! The simulation never touches pixel data. It only needs an opaque handle to
//! pass back to the renderer and the sprite footprint to size colliders and
//! muzzle offsets. Anything that can answer those questions implements
//! [`AssetProvider`].

use std::collections::BTreeMap;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Logical name of the player ship sprite
pub const PLAYER_SPRITE: &str = "player";
/// Logical name of the bullet sprite
pub const BULLET_SPRITE: &str = "laser";
/// Prefix shared by all meteor sprite variants
pub const METEOR_SPRITE_PREFIX: &str = "meteors/";

/// Opaque drawable handle issued by an asset provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// A drawable handle plus its pixel footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub handle: SpriteHandle,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(handle: SpriteHandle, width: f32, height: f32) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size() / 2.0
    }
}

/// Source of sprites, keyed by logical name
pub trait AssetProvider {
    /// Look up a single sprite
    fn sprite(&self, name: &str) -> Option<Sprite>;

    /// All sprites whose name starts with `prefix`, in a stable order
    fn sprites_with_prefix(&self, prefix: &str) -> Vec<Sprite>;
}

/// One entry of a sprite manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteEntry {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

/// Sprite manifest document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteManifest {
    pub sprites: Vec<SpriteEntry>,
}

/// In-memory asset provider: names mapped to footprints
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    entries: BTreeMap<String, Sprite>,
    next_handle: u32,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an atlas from a JSON sprite manifest
    pub fn from_manifest_json(json: &str) -> Result<Self, GameError> {
        let manifest: SpriteManifest = serde_json::from_str(json)?;
        let mut atlas = Self::new();
        for entry in manifest.sprites {
            atlas.insert(&entry.name, entry.width, entry.height);
        }
        log::debug!("Sprite atlas holds {} entries", atlas.len());
        Ok(atlas)
    }

    /// Register a sprite, replacing any previous entry of the same name
    pub fn insert(&mut self, name: &str, width: f32, height: f32) -> Sprite {
        let handle = SpriteHandle(self.next_handle);
        self.next_handle += 1;
        let sprite = Sprite::new(handle, width, height);
        self.entries.insert(name.to_string(), sprite);
        sprite
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetProvider for SpriteAtlas {
    fn sprite(&self, name: &str) -> Option<Sprite> {
        self.entries.get(name).copied()
    }

    fn sprites_with_prefix(&self, prefix: &str) -> Vec<Sprite> {
        self.entries
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(_, sprite)| *sprite)
            .collect()
    }
}

/// Meteor sprite variants, never empty
#[derive(Debug, Clone)]
pub struct MeteorSprites(Vec<Sprite>);

impl MeteorSprites {
    pub fn new(sprites: Vec<Sprite>) -> Result<Self, GameError> {
        if sprites.is_empty() {
            return Err(GameError::NoMeteorSprites);
        }
        Ok(Self(sprites))
    }

    /// Pick a variant uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Sprite {
        self.0[rng.random_range(0..self.0.len())]
    }

    pub fn as_slice(&self) -> &[Sprite] {
        &self.0
    }
}

/// Sprites the simulation needs, resolved once at startup
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub player: Sprite,
    pub bullet: Sprite,
    pub meteors: MeteorSprites,
}

impl GameAssets {
    /// Resolve every required sprite; any gap is a fatal configuration error
    pub fn load(provider: &impl AssetProvider) -> Result<Self, GameError> {
        let player = provider
            .sprite(PLAYER_SPRITE)
            .ok_or_else(|| GameError::MissingSprite(PLAYER_SPRITE.to_string()))?;
        let bullet = provider
            .sprite(BULLET_SPRITE)
            .ok_or_else(|| GameError::MissingSprite(BULLET_SPRITE.to_string()))?;
        let meteors = MeteorSprites::new(provider.sprites_with_prefix(METEOR_SPRITE_PREFIX))?;

        log::info!(
            "Resolved sprites: player {}x{}, bullet {}x{}, {} meteor variants",
            player.width,
            player.height,
            bullet.width,
            bullet.height,
            meteors.as_slice().len()
        );

        Ok(Self {
            player,
            bullet,
            meteors,
        })
    }
}
