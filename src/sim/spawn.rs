//! Fruit spawner and cadence curve

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Fruit, FruitKind, GameState};
use crate::audio::{AudioCue, AudioSink};
use crate::consts::*;

/// Seconds between spawns after `total_elapsed` seconds of play.
///
/// Falls linearly from `SPAWN_MAX_INTERVAL` and is clamped at
/// `SPAWN_MIN_INTERVAL` (reached at 27 s).
pub fn spawn_interval(total_elapsed: f32) -> f32 {
    let raw = SPAWN_MAX_INTERVAL - total_elapsed / RAMP_DURATION;
    raw.max(SPAWN_MIN_INTERVAL)
}

/// Spawn one fruit if the accumulated gap exceeds the cadence threshold.
/// Returns the pool slot written, if any.
pub fn update_spawner(
    state: &mut GameState,
    rng: &mut impl RandomSource,
    audio: &mut impl AudioSink,
) -> Option<usize> {
    if state.spawn_elapsed > spawn_interval(state.total_elapsed) {
        state.spawn_elapsed = 0.0;
        Some(spawn_fruit(state, rng, audio))
    } else {
        None
    }
}

/// Launch a fruit from the bottom edge at the pool cursor
pub fn spawn_fruit(
    state: &mut GameState,
    rng: &mut impl RandomSource,
    audio: &mut impl AudioSink,
) -> usize {
    audio.play(AudioCue::FruitSpawn);

    let kind = FruitKind::from_roll(rng.random_int(1, 100));
    let x = rng.random_int(
        (SCREEN_WIDTH * 0.25) as i32,
        (SCREEN_WIDTH * 0.75) as i32,
    );
    let strafe = rng.random_int(MIN_FRUIT_STRAFE, MAX_FRUIT_STRAFE);
    let thrust = rng.random_int(MIN_FRUIT_THRUST, MAX_FRUIT_THRUST);

    let fruit = Fruit {
        kind,
        pos: Vec2::new(x as f32, SCREEN_HEIGHT),
        vel: Vec2::new(strafe as f32, -(thrust as f32)),
        alive: true,
    };
    let index = state.fruits.alloc(fruit);
    log::debug!(
        "Spawned {} in slot {} at x={} vel=({}, {})",
        kind.as_str(),
        index,
        x,
        strafe,
        -thrust
    );
    index
}
