//! Axis-aligned collision detection
//!
//! Colliders are derived from an entity's position and sprite footprint on
//! every query. Sprite rotation is drawn but never applied to the box, so a
//! rotated ship or meteor collides as if it were upright.

use glam::Vec2;

/// Axis-aligned box (top-left corner plus extent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box with its top-left corner at `origin`
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Overlap test with inclusive edges (touching boxes intersect)
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }
}

/// Match targets against projectiles.
///
/// Targets are visited in order; each one claims the first projectile it
/// overlaps that no earlier target has claimed. Returns `(target, projectile)`
/// index pairs. Neither index ever appears twice, so the caller can remove
/// every matched entry after the scan without skipping or double-removing.
pub fn find_hit_pairs(targets: &[Rect], projectiles: &[Rect]) -> Vec<(usize, usize)> {
    let mut claimed = vec![false; projectiles.len()];
    let mut pairs = Vec::new();

    for (ti, target) in targets.iter().enumerate() {
        let hit = projectiles
            .iter()
            .enumerate()
            .find(|(pi, projectile)| !claimed[*pi] && target.intersects(projectile));

        if let Some((pi, _)) = hit {
            claimed[pi] = true;
            pairs.push((ti, pi));
        }
    }

    pairs
}

/// Drop every element whose index is marked, preserving order of the rest
pub fn remove_marked<T>(items: &mut Vec<T>, marked: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !marked.get(index).copied().unwrap_or(false);
        index += 1;
        keep
    });
}
