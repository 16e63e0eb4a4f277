//! Slash gesture, trail particles, hit test and the slash handler

use glam::Vec2;

use super::state::{Fruit, GameState, Particle};
use crate::audio::{AudioCue, AudioSink};
use crate::consts::*;

/// Outcome of slashing one fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashOutcome {
    /// A scoring fruit; carries the points awarded
    Scored(u32),
    /// The donut; the round is over
    Forbidden,
}

/// Apply this frame's pointer edges to the `slashing` level.
///
/// Returns true when the release must be deferred to the end of the tick
/// (press and release landed in the same frame).
pub fn apply_gesture(state: &mut GameState, pressed: bool, released: bool) -> bool {
    if pressed {
        state.slashing = true;
        released
    } else {
        if released {
            state.slashing = false;
        }
        false
    }
}

/// Drop a trail dot under the pointer
pub fn emit_trail(state: &mut GameState) {
    let pointer = state.pointer;
    state.particles.alloc(Particle {
        pos: pointer,
        age: 0.0,
        alive: true,
    });
}

/// Age every live trail dot, retiring the old ones
pub fn age_particles(state: &mut GameState, dt: f32) {
    for particle in state.particles.iter_alive_mut() {
        particle.age += dt;
        if particle.age > PARTICLE_MAX_AGE {
            particle.alive = false;
        }
    }
}

/// Point-in-circle against the fruit's visual center
pub fn pointer_hits(fruit: &Fruit, pointer: Vec2) -> bool {
    fruit.center().distance_squared(pointer) <= FRUIT_RADIUS * FRUIT_RADIUS
}

/// Destroy the fruit in `index` and apply its scoring rule
pub fn slash_fruit(
    state: &mut GameState,
    index: usize,
    audio: &mut impl AudioSink,
) -> SlashOutcome {
    let fruit = &mut state.fruits.slots_mut()[index];
    fruit.alive = false;
    let kind = fruit.kind;

    match kind.score() {
        Some(points) => {
            state.score += points;
            state.slashed += 1;
            audio.play(AudioCue::FruitSlash);
            log::debug!("Slashed {} for {} (score {})", kind.as_str(), points, state.score);
            SlashOutcome::Scored(points)
        }
        None => {
            audio.play(AudioCue::ForbiddenSlash);
            state.enter_lose();
            SlashOutcome::Forbidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::sim::state::{FruitKind, GamePhase};

    fn fruit_at(kind: FruitKind, pos: Vec2) -> Fruit {
        Fruit {
            kind,
            pos,
            vel: Vec2::ZERO,
            alive: true,
        }
    }

    #[test]
    fn test_gesture_edges() {
        let mut state = GameState::new();
        assert!(!apply_gesture(&mut state, true, false));
        assert!(state.slashing);

        // Level holds with no edges
        assert!(!apply_gesture(&mut state, false, false));
        assert!(state.slashing);

        assert!(!apply_gesture(&mut state, false, true));
        assert!(!state.slashing);
    }

    #[test]
    fn test_press_and_release_same_frame_defers_release() {
        let mut state = GameState::new();
        assert!(apply_gesture(&mut state, true, true));
        assert!(state.slashing);
    }

    #[test]
    fn test_hit_uses_sprite_center() {
        let fruit = fruit_at(FruitKind::Apple, Vec2::new(100.0, 100.0));
        assert!(pointer_hits(&fruit, Vec2::new(132.0, 132.0)));
        // Exactly on the rim counts
        assert!(pointer_hits(&fruit, Vec2::new(164.0, 132.0)));
        assert!(!pointer_hits(&fruit, Vec2::new(164.5, 132.0)));
        // The top-left corner itself lies outside the circle
        assert!(!pointer_hits(&fruit, Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_particles_expire_after_max_age() {
        let mut state = GameState::new();
        state.pointer = Vec2::new(10.0, 20.0);
        emit_trail(&mut state);
        assert_eq!(state.particles.alive_count(), 1);
        assert_eq!(state.particles.slots()[0].pos, Vec2::new(10.0, 20.0));

        age_particles(&mut state, 0.05);
        assert_eq!(state.particles.alive_count(), 1);
        age_particles(&mut state, 0.05);
        // 0.1 is not older than the limit
        assert_eq!(state.particles.alive_count(), 1);
        age_particles(&mut state, 0.01);
        assert_eq!(state.particles.alive_count(), 0);
    }

    #[test]
    fn test_slash_scoring_kinds() {
        let mut state = GameState::new();
        state.enter_play();
        let mut audio = RecordingAudio::default();

        for (kind, points) in [
            (FruitKind::Apple, 1),
            (FruitKind::Banana, 3),
            (FruitKind::Cherry, 9),
        ] {
            let index = state.fruits.alloc(fruit_at(kind, Vec2::ZERO));
            assert_eq!(
                slash_fruit(&mut state, index, &mut audio),
                SlashOutcome::Scored(points)
            );
            assert!(!state.fruits.slots()[index].alive);
        }

        assert_eq!(state.score, 13);
        assert_eq!(state.slashed, 3);
        assert_eq!(audio.count(AudioCue::FruitSlash), 3);
        assert_eq!(state.phase, GamePhase::Play);
    }

    #[test]
    fn test_slash_donut_loses() {
        let mut state = GameState::new();
        state.enter_play();
        state.score = 4;
        state.slashed = 2;
        state.fruits.alloc(fruit_at(FruitKind::Apple, Vec2::ZERO));
        let index = state.fruits.alloc(fruit_at(FruitKind::Donut, Vec2::ZERO));
        emit_trail(&mut state);
        let mut audio = RecordingAudio::default();

        assert_eq!(
            slash_fruit(&mut state, index, &mut audio),
            SlashOutcome::Forbidden
        );
        assert_eq!(state.phase, GamePhase::Lose);
        assert_eq!(state.score, 4);
        assert_eq!(state.slashed, 2);
        assert_eq!(state.fruits.alive_count(), 0);
        assert_eq!(state.particles.alive_count(), 0);
        assert_eq!(audio.cues, vec![AudioCue::ForbiddenSlash]);
    }
}
