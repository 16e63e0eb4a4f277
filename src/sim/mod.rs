//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod pool;
pub mod rng;
pub mod slash;
pub mod spawn;
pub mod state;
pub mod tick;

pub use pool::{RingPool, Slot};
pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
pub use slash::{SlashOutcome, pointer_hits};
pub use spawn::spawn_interval;
pub use state::{Fruit, FruitKind, GamePhase, GameState, Particle};
pub use tick::{TickInput, tick};
