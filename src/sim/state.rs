//! Game state and core simulation types
//!
//! Every entity lives for the whole process; only `alive` flags, positions
//! and the run counters evolve.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::{RingPool, Slot};
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a press
    #[default]
    Start,
    /// Active gameplay
    Play,
    /// A donut was slashed; waiting for a press to return to the title
    Lose,
}

/// Fruit kinds, scoring kinds in ascending rarity and value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FruitKind {
    #[default]
    Apple,
    Banana,
    Cherry,
    /// The forbidden kind: slashing it ends the round
    Donut,
}

impl FruitKind {
    pub const ALL: [FruitKind; 4] = [
        FruitKind::Apple,
        FruitKind::Banana,
        FruitKind::Cherry,
        FruitKind::Donut,
    ];

    /// Map a spawn roll in [1, 100] onto a kind via the cumulative ceilings
    pub fn from_roll(roll: i32) -> Self {
        if roll <= APPLE_SPAWN_CEILING {
            FruitKind::Apple
        } else if roll <= BANANA_SPAWN_CEILING {
            FruitKind::Banana
        } else if roll <= CHERRY_SPAWN_CEILING {
            FruitKind::Cherry
        } else {
            FruitKind::Donut
        }
    }

    /// Points awarded for slashing this kind (None for the donut)
    pub fn score(&self) -> Option<u32> {
        match self {
            FruitKind::Apple => Some(APPLE_SCORE),
            FruitKind::Banana => Some(BANANA_SCORE),
            FruitKind::Cherry => Some(CHERRY_SCORE),
            FruitKind::Donut => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, FruitKind::Donut)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Apple => "Apple",
            FruitKind::Banana => "Banana",
            FruitKind::Cherry => "Cherry",
            FruitKind::Donut => "Donut",
        }
    }
}

/// A launched fruit. `pos` is the sprite's top-left corner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Fruit {
    pub kind: FruitKind,
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub alive: bool,
}

impl Fruit {
    /// Visual center of the sprite
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(FRUIT_RADIUS)
    }
}

impl Slot for Fruit {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

/// A slash trail dot
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Seconds since spawn
    pub age: f32,
    pub alive: bool,
}

impl Slot for Particle {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Fruit pool
    pub fruits: RingPool<Fruit>,
    /// Slash trail pool
    pub particles: RingPool<Particle>,
    /// Score
    pub score: u32,
    /// Scoring fruits destroyed this run
    pub slashed: u32,
    /// Seconds since the last spawn
    pub spawn_elapsed: f32,
    /// Seconds since entering Play
    pub total_elapsed: f32,
    /// Pointer button held during Play
    pub slashing: bool,
    /// Last known pointer position
    pub pointer: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh state on the title screen with empty pools
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Start,
            fruits: RingPool::new(MAX_FRUITS),
            particles: RingPool::new(MAX_PARTICLES),
            score: 0,
            slashed: 0,
            spawn_elapsed: 0.0,
            total_elapsed: 0.0,
            slashing: false,
            pointer: Vec2::ZERO,
            time_ticks: 0,
        }
    }

    /// START -> PLAY
    pub fn enter_play(&mut self) {
        self.phase = GamePhase::Play;
        self.spawn_elapsed = 0.0;
        self.total_elapsed = 0.0;
        self.slashing = false;
        log::info!("Round started");
    }

    /// PLAY -> LOSE
    pub fn enter_lose(&mut self) {
        self.phase = GamePhase::Lose;
        self.fruits.kill_all();
        self.particles.kill_all();
        self.spawn_elapsed = 0.0;
        self.total_elapsed = 0.0;
        self.slashing = false;
        log::info!(
            "Round lost: score {} with {} fruits slashed",
            self.score,
            self.slashed
        );
    }

    /// LOSE -> START
    pub fn enter_start(&mut self) {
        self.phase = GamePhase::Start;
        self.score = 0;
        self.slashed = 0;
        log::info!("Back to title");
    }
}
