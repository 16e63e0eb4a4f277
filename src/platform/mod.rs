//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (latched between frames, consumed per tick)
//! - Frame time (fixed-step accumulator)
//! - Demo input (autopilot)

pub mod autopilot;

pub use autopilot::Autopilot;

use glam::Vec2;

use crate::consts::*;
use crate::sim::TickInput;

/// Per-frame input surface the core consumes
pub trait InputSource {
    fn frame_delta_seconds(&self) -> f32;
    fn pointer_position(&self) -> Vec2;
    fn pointer_pressed_this_frame(&self) -> bool;
    fn pointer_released_this_frame(&self) -> bool;
    fn mute_toggle_this_frame(&self) -> bool;
}

/// Snapshot an input source into a tick input
pub fn capture(source: &impl InputSource) -> TickInput {
    TickInput {
        dt: source.frame_delta_seconds(),
        pointer: source.pointer_position(),
        pressed: source.pointer_pressed_this_frame(),
        released: source.pointer_released_this_frame(),
        mute_toggle: source.mute_toggle_this_frame(),
    }
}

/// Collects host events between ticks.
///
/// Event handlers set edges as they arrive; the tick that consumes them
/// calls `clear_edges`.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pointer: Vec2,
    pressed: bool,
    released: bool,
    mute_toggle: bool,
}

impl InputLatch {
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// A press supersedes any release latched before it
    pub fn on_pointer_down(&mut self) {
        self.pressed = true;
        self.released = false;
    }

    pub fn on_pointer_up(&mut self) {
        self.released = true;
    }

    pub fn on_mute_key(&mut self) {
        self.mute_toggle = true;
    }

    /// Drop one-shot edges once a tick has seen them
    pub fn clear_edges(&mut self) {
        self.pressed = false;
        self.released = false;
        self.mute_toggle = false;
    }
}

impl InputSource for InputLatch {
    fn frame_delta_seconds(&self) -> f32 {
        SIM_DT
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn pointer_pressed_this_frame(&self) -> bool {
        self.pressed
    }

    fn pointer_released_this_frame(&self) -> bool {
        self.released
    }

    fn mute_toggle_this_frame(&self) -> bool {
        self.mute_toggle
    }
}

/// Fixed-step accumulator locking the simulation to `TARGET_FPS`
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    /// Longest frame we try to catch up on
    const MAX_FRAME_DT: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Feed real frame time; returns how many fixed ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, Self::MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Spiral of death guard: drop the backlog
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    /// Leftover time not yet simulated
    pub fn backlog(&self) -> f32 {
        self.accumulator
    }
}
