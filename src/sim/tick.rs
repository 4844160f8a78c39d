//! Fixed timestep simulation tick
//!
//! Core game loop step. One call advances the world by exactly one tick; the
//! per-tick distances are already scaled by the configured tick rate.

use super::entities::Entity;
use super::state::{GameEvent, GameState};
use crate::sim::collision::Rect;

/// Input signals for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Turn counter-clockwise
    pub rotate_left: bool,
    /// Turn clockwise
    pub rotate_right: bool,
    /// Fire (held; the weapon cooldown gates the rate)
    pub fire: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    let tps = state.settings.ticks_per_second;

    // Ship first: a bullet fired now moves with the others below
    if let Some(bullet) = state
        .world
        .player
        .update(input, &state.settings, state.assets.bullet)
    {
        state.world.bullets.push(bullet);
        state.events.push(GameEvent::BulletFired);
    }

    state.world.spawn_timer.update();
    if state.world.spawn_timer.is_ready() {
        state.world.spawn_timer.reset();
        state.spawn_meteor();
        state.events.push(GameEvent::MeteorSpawned);
    }

    for meteor in &mut state.world.meteors {
        meteor.update();
    }
    for bullet in &mut state.world.bullets {
        bullet.update(tps);
    }

    if state.settings.cull_offscreen {
        cull_offscreen(state);
    }

    let hits = state.world.resolve_bullet_hits();
    for _ in 0..hits {
        state.world.score += 1;
        state.events.push(GameEvent::MeteorDestroyed {
            score: state.world.score,
        });
    }
    if hits > 0 {
        log::debug!("{} meteor(s) destroyed, score {}", hits, state.world.score);
    }

    if state.world.meteor_hitting_player().is_some() {
        let final_score = state.world.score;
        log::info!(
            "Player destroyed at tick {} with score {}",
            state.time_ticks,
            final_score
        );
        state.reset();
        state.events.push(GameEvent::PlayerDestroyed { final_score });
    }
}

/// Drop bullets that left the screen and meteors that flew past the target
fn cull_offscreen(state: &mut GameState) {
    let screen = Rect::new(
        0.0,
        0.0,
        state.settings.screen_width,
        state.settings.screen_height,
    );
    let settings = &state.settings;

    state
        .world
        .bullets
        .retain(|b| b.collider().intersects(&screen));
    state.world.meteors.retain(|m| !m.has_escaped(settings));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ScorePolicy, Settings};
    use crate::sim::entities::{Bullet, Meteor};
    use crate::sim::state::test_support::{state, state_with};
    use glam::Vec2;

    const FIRE: TickInput = TickInput {
        rotate_left: false,
        rotate_right: false,
        fire: true,
    };

    #[test]
    fn test_spawn_cadence() {
        let mut state = state();
        let idle = TickInput::default();

        for _ in 0..59 {
            tick(&mut state, &idle);
        }
        assert_eq!(state.world.meteors.len(), 0);

        tick(&mut state, &idle);
        assert_eq!(state.world.meteors.len(), 1);
        assert!(state.events.contains(&GameEvent::MeteorSpawned));

        for _ in 61..120 {
            tick(&mut state, &idle);
            assert_eq!(state.world.meteors.len(), 1);
        }

        tick(&mut state, &idle);
        assert_eq!(state.time_ticks, 120);
        assert_eq!(state.world.meteors.len(), 2);
    }

    #[test]
    fn test_fired_bullet_leaves_nose_and_moves_same_tick() {
        let mut state = state();
        let idle = TickInput::default();
        // Let the weapon cool down without firing
        for _ in 0..29 {
            tick(&mut state, &idle);
        }

        let nose = state.world.player.position
            + state.assets.player.half_extents()
            + Vec2::new(0.0, -50.0);
        tick(&mut state, &FIRE);

        assert!(state.events.contains(&GameEvent::BulletFired));
        assert_eq!(state.world.bullets.len(), 1);
        let bullet = &state.world.bullets[0];
        assert_eq!(bullet.heading, 0.0);
        let moved = nose + Vec2::new(0.0, -350.0 / 60.0);
        assert!((bullet.center() - moved).length() < 1e-3);
    }

    #[test]
    fn test_bullet_destroys_meteor_and_scores() {
        let mut state = state();
        let sprite = state.assets.meteors.as_slice()[1];
        state
            .world
            .meteors
            .push(Meteor::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 0.0, sprite));
        state
            .world
            .bullets
            .push(Bullet::new(Vec2::new(114.0, 120.0), 0.0, 350.0, state.assets.bullet));

        tick(&mut state, &TickInput::default());

        assert!(state.world.meteors.is_empty());
        assert!(state.world.bullets.is_empty());
        assert_eq!(state.score(), 1);
        assert_eq!(state.events, vec![GameEvent::MeteorDestroyed { score: 1 }]);
    }

    #[test]
    fn test_meteor_hitting_player_resets_world() {
        let mut state = state();
        let center = state.settings.screen_center();
        let sprite = state.assets.meteors.as_slice()[1];
        state.world.score = 4;
        state.world.player.rotation = 1.5;
        state.world.meteors.push(Meteor::new(center, Vec2::ZERO, 0.0, sprite));
        state.world.meteors.push(Meteor::new(Vec2::new(10.0, 10.0), Vec2::ZERO, 0.0, sprite));
        state
            .world
            .bullets
            .push(Bullet::new(Vec2::new(50.0, 400.0), 0.0, 350.0, state.assets.bullet));

        tick(&mut state, &TickInput::default());

        assert!(state.world.meteors.is_empty());
        assert!(state.world.bullets.is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.world.player.rotation, 0.0);
        assert_eq!(
            state.world.player.position,
            center - state.assets.player.half_extents()
        );
        assert_eq!(state.events, vec![GameEvent::PlayerDestroyed { final_score: 4 }]);
        assert_eq!(state.resets, 1);
    }

    #[test]
    fn test_bullet_hit_resolves_before_player_collision() {
        let mut state = state();
        let center = state.settings.screen_center();
        let sprite = state.assets.meteors.as_slice()[1];

        // Meteor on the ship with a bullet inside it: the bullet wins
        state.world.meteors.push(Meteor::new(center, Vec2::ZERO, 0.0, sprite));
        state
            .world
            .bullets
            .push(Bullet::new(center + Vec2::new(14.0, 30.0), 0.0, 350.0, state.assets.bullet));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score(), 1);
        assert_eq!(state.resets, 0);
        assert!(state.world.meteors.is_empty());
        assert_eq!(state.events, vec![GameEvent::MeteorDestroyed { score: 1 }]);

        // Two meteors on the ship, one bullet: the hit is scored, then the
        // survivor resets the world and nothing else happens that tick
        state.world.meteors.push(Meteor::new(center, Vec2::ZERO, 0.0, sprite));
        state
            .world
            .meteors
            .push(Meteor::new(center - Vec2::new(20.0, 0.0), Vec2::ZERO, 0.0, sprite));
        state
            .world
            .bullets
            .push(Bullet::new(center + Vec2::new(14.0, 30.0), 0.0, 350.0, state.assets.bullet));

        tick(&mut state, &TickInput::default());

        assert_eq!(
            state.events,
            vec![
                GameEvent::MeteorDestroyed { score: 2 },
                GameEvent::PlayerDestroyed { final_score: 2 },
            ]
        );
        assert_eq!(state.resets, 1);
        assert_eq!(state.score(), 0);
        assert!(state.world.meteors.is_empty());
        assert!(state.world.bullets.is_empty());
    }

    #[test]
    fn test_score_persists_across_reset_when_configured() {
        let mut state = state_with(Settings {
            score_policy: ScorePolicy::Persist,
            ..Default::default()
        });
        let sprite = state.assets.meteors.as_slice()[1];
        state.world.score = 9;
        let center = state.settings.screen_center();
        state.world.meteors.push(Meteor::new(center, Vec2::ZERO, 0.0, sprite));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score(), 9);
        assert!(state.world.meteors.is_empty());
    }

    #[test]
    fn test_offscreen_bullets_culled() {
        let mut state = state();
        state
            .world
            .bullets
            .push(Bullet::new(Vec2::new(400.0, -26.0), 0.0, 350.0, state.assets.bullet));
        state
            .world
            .bullets
            .push(Bullet::new(Vec2::new(50.0, 300.0), 0.0, 350.0, state.assets.bullet));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.world.bullets.len(), 1);
        assert!(state.world.bullets[0].center().y < 300.0);
    }

    #[test]
    fn test_offscreen_bullets_kept_when_culling_disabled() {
        let mut state = state_with(Settings {
            cull_offscreen: false,
            ..Default::default()
        });
        state
            .world
            .bullets
            .push(Bullet::new(Vec2::new(400.0, -500.0), 0.0, 350.0, state.assets.bullet));

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.world.bullets.len(), 1);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = state();
        let mut state2 = state();

        let inputs = [
            TickInput {
                rotate_left: true,
                ..Default::default()
            },
            FIRE,
            TickInput {
                rotate_right: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[(i / 37) % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.resets, state2.resets);
        assert_eq!(state1.world.meteors.len(), state2.world.meteors.len());
        assert_eq!(state1.world.bullets.len(), state2.world.bullets.len());
        for (a, b) in state1.world.meteors.iter().zip(&state2.world.meteors) {
            assert_eq!(a.position, b.position);
        }
        assert!((state1.world.player.rotation - state2.world.player.rotation).abs() < 1e-6);
    }
}
