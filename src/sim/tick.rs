//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::rng::RandomSource;
use super::slash::{
    SlashOutcome, age_particles, apply_gesture, emit_trail, pointer_hits, slash_fruit,
};
use super::spawn::update_spawner;
use super::state::{GamePhase, GameState};
use crate::audio::AudioSink;
use crate::consts::*;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Pointer position in play-field pixels
    pub pointer: Vec2,
    /// Pointer button went down this frame
    pub pressed: bool,
    /// Pointer button went up this frame
    pub released: bool,
    /// Music mute key went down this frame
    pub mute_toggle: bool,
}

impl TickInput {
    /// Plain tick at the fixed rate with the pointer at `pointer`
    pub fn at(pointer: Vec2) -> Self {
        Self {
            dt: SIM_DT,
            pointer,
            ..Default::default()
        }
    }
}

/// Advance the game state by one tick
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
    audio: &mut impl AudioSink,
) {
    state.time_ticks += 1;
    state.pointer = input.pointer;

    match state.phase {
        GamePhase::Start => {
            if input.pressed {
                state.enter_play();
            }
        }
        GamePhase::Play => update_play(state, input, rng, audio),
        GamePhase::Lose => {
            if input.pressed {
                state.enter_start();
            }
        }
    }
}

fn update_play(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
    audio: &mut impl AudioSink,
) {
    state.spawn_elapsed += input.dt;
    state.total_elapsed += input.dt;

    let deferred_release = apply_gesture(state, input.pressed, input.released);

    if state.slashing {
        emit_trail(state);
    }
    age_particles(state, input.dt);

    update_spawner(state, rng, audio);

    // Cull -> slash -> integrate, in slot order
    for index in 0..state.fruits.capacity() {
        let fruit = state.fruits.slots()[index];
        if !fruit.alive {
            continue;
        }

        if fruit.pos.y > SCREEN_HEIGHT {
            state.fruits.slots_mut()[index].alive = false;
            log::trace!("Culled {} in slot {}", fruit.kind.as_str(), index);
        } else if state.slashing && pointer_hits(&fruit, state.pointer) {
            if slash_fruit(state, index, audio) == SlashOutcome::Forbidden {
                // Round over; the pools are already cleared
                return;
            }
        } else {
            integrate(&mut state.fruits.slots_mut()[index]);
        }
    }

    if deferred_release {
        state.slashing = false;
    }
}

/// One ballistic step: move, then accelerate downward
fn integrate(fruit: &mut super::state::Fruit) {
    fruit.pos += fruit.vel;
    fruit.vel.y += GRAVITY_PER_TICK;
}
