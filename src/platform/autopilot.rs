//! Demo autopilot
//!
//! Plays the game from the state alone: chases the most valuable fruit on
//! screen with the button held and lets go whenever the donut is in reach.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, TickInput};

/// Max pointer travel per tick
const POINTER_SPEED: f32 = 36.0;
/// Extra clearance kept around donuts
const DONUT_MARGIN: f32 = 6.0;
/// Ticks to linger on the title and lose screens
const SCREEN_LINGER_TICKS: u32 = 45;
/// Keep the pointer off the spawn edge, where new donuts appear
const MAX_POINTER_Y: f32 = SCREEN_HEIGHT - 40.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    pointer: Vec2,
    idle_ticks: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::new(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5),
            idle_ticks: 0,
        }
    }

    /// Decide the input for the next tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let mut input = TickInput::at(self.pointer);

        match state.phase {
            GamePhase::Start | GamePhase::Lose => {
                self.idle_ticks += 1;
                if self.idle_ticks >= SCREEN_LINGER_TICKS {
                    self.idle_ticks = 0;
                    input.pressed = true;
                }
            }
            GamePhase::Play => {
                self.idle_ticks = 0;

                let target = best_target(state);
                if let Some(target) = target {
                    let step = (target - self.pointer).clamp_length_max(POINTER_SPEED);
                    self.pointer = (self.pointer + step).clamp(
                        Vec2::ZERO,
                        Vec2::new(SCREEN_WIDTH, MAX_POINTER_Y),
                    );
                }
                input.pointer = self.pointer;

                let want_slash = target.is_some() && !donut_in_reach(state, self.pointer);
                if want_slash && !state.slashing {
                    input.pressed = true;
                } else if !want_slash && state.slashing {
                    input.released = true;
                }
            }
        }

        input
    }
}

/// Center of the most valuable scoring fruit on screen
fn best_target(state: &GameState) -> Option<Vec2> {
    state
        .fruits
        .iter_alive()
        .filter(|f| f.pos.y <= SCREEN_HEIGHT)
        .filter_map(|f| f.kind.score().map(|points| (points, f.center())))
        .max_by(|a, b| {
            a.0.cmp(&b.0).then_with(|| {
                // Higher on screen is easier to reach safely
                b.1.y
                    .partial_cmp(&a.1.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        })
        .map(|(_, center)| center)
}

fn donut_in_reach(state: &GameState, pointer: Vec2) -> bool {
    let reach = FRUIT_RADIUS + DONUT_MARGIN;
    state
        .fruits
        .iter_alive()
        .filter(|f| f.kind.is_forbidden())
        .any(|f| f.center().distance_squared(pointer) <= reach * reach)
}
