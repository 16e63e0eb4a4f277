//! Fruit Slash - slash the fruit, never the donut
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (pools, spawner, slashing, scoring)
//! - `game`: The `Game` value the host drives once per frame
//! - `platform`: Input surface, frame clock and demo autopilot
//! - `audio`: Audio cue sink and music stream
//! - `renderer`: Draw contract and per-phase frame layout
//! - `settings`: Runtime configuration

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field size in pixels (y grows downward)
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 540.0;

    /// Target tick rate; all per-tick quantities assume it
    pub const TARGET_FPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Pool capacities
    pub const MAX_FRUITS: usize = 48;
    pub const MAX_PARTICLES: usize = 16;

    /// Fruit sprites are 2 * FRUIT_RADIUS square, drawn from the top-left corner
    pub const FRUIT_RADIUS: f32 = 32.0;
    /// Pointer marker and trail dot radius
    pub const POINTER_RADIUS: f32 = 8.0;

    /// Upward launch speed range (pixels/tick)
    pub const MIN_FRUIT_THRUST: i32 = 5;
    pub const MAX_FRUIT_THRUST: i32 = 20;
    /// Sideways launch speed range (pixels/tick)
    pub const MIN_FRUIT_STRAFE: i32 = -5;
    pub const MAX_FRUIT_STRAFE: i32 = 5;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY_PER_TICK: f32 = 10.0 / TARGET_FPS as f32;

    /// Cadence curve: gap between spawns ramps from MAX to MIN over the ramp
    pub const SPAWN_MAX_INTERVAL: f32 = 1.0;
    pub const SPAWN_MIN_INTERVAL: f32 = 0.1;
    pub const RAMP_DURATION: f32 = 30.0;

    /// Cumulative spawn-roll ceilings over [1, 100]
    pub const APPLE_SPAWN_CEILING: i32 = 50;
    pub const BANANA_SPAWN_CEILING: i32 = 75;
    pub const CHERRY_SPAWN_CEILING: i32 = 85;
    pub const DONUT_SPAWN_CEILING: i32 = 100;

    /// Points per scoring kind (geometric, ratio 3)
    pub const APPLE_SCORE: u32 = 1;
    pub const BANANA_SCORE: u32 = APPLE_SCORE * 3;
    pub const CHERRY_SCORE: u32 = BANANA_SCORE * 3;

    /// Trail particles die once older than this (seconds)
    pub const PARTICLE_MAX_AGE: f32 = 0.1;

    /// Text sizes
    pub const LARGE_TEXT_SIZE: f32 = 40.0;
    pub const NORMAL_TEXT_SIZE: f32 = LARGE_TEXT_SIZE * 0.5;
}
