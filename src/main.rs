//! Meteors entry point
//!
//! Headless runner: loads settings and the sprite manifest, then lets a
//! scripted pilot play for a while and reports what happened.

use std::time::{SystemTime, UNIX_EPOCH};

use meteors::platform::{Action, GameLoop, KeyState};
use meteors::renderer::DrawList;
use meteors::sim::{GameEvent, GameState};
use meteors::{GameAssets, GameError, Settings, SpriteAtlas};

/// Sprite footprints shipped with the game
const SPRITE_MANIFEST: &str = include_str!("../assets/sprites.json");

/// Simulated play time for the headless run
const RUN_SECONDS: u32 = 60;
const FRAME_DT: f32 = 1.0 / 60.0;

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Sweep back and forth, firing constantly
fn pilot(keys: &mut KeyState, tick: u64, ticks_per_second: u32) {
    let half_period = u64::from(ticks_per_second) * 2;
    let sweeping_right = (tick / half_period) % 2 == 0;
    keys.set(Action::RotateRight, sweeping_right);
    keys.set(Action::RotateLeft, !sweeping_right);
    keys.press(Action::Fire);
}

fn run() -> Result<(), GameError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let atlas = SpriteAtlas::from_manifest_json(SPRITE_MANIFEST)?;
    let assets = GameAssets::load(&atlas)?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let state = GameState::new(settings, assets, seed)?;
    let mut game = GameLoop::new(state);

    let mut keys = KeyState::default();
    let mut frame = DrawList::new();
    let mut best_score = 0;
    let mut kills = 0u64;
    let frames = (RUN_SECONDS as f32 / FRAME_DT).round() as u32;

    for _ in 0..frames {
        let tps = game.state.settings.ticks_per_second;
        pilot(&mut keys, game.state.time_ticks, tps);

        frame.clear();
        game.frame(FRAME_DT, &keys, &mut frame);

        for event in game.frame_events() {
            match *event {
                GameEvent::MeteorDestroyed { score } => {
                    kills += 1;
                    best_score = best_score.max(score);
                }
                GameEvent::PlayerDestroyed { final_score } => {
                    best_score = best_score.max(final_score);
                }
                _ => {}
            }
        }
    }

    let state = &game.state;
    log::info!(
        "Ran {} ticks: {} meteors destroyed, {} deaths, best score {}",
        state.time_ticks,
        kills,
        state.resets,
        best_score
    );
    println!(
        "ticks={} kills={} deaths={} best={} score={} sprites_last_frame={}",
        state.time_ticks,
        kills,
        state.resets,
        best_score,
        state.score(),
        frame.sprite_count()
    );

    Ok(())
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Meteors (headless) starting...");

    if let Err(e) = run() {
        log::error!("Startup failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
