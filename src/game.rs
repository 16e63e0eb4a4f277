//! The `Game` value a host drives
//!
//! Bundles the simulation state with its injected collaborators so the
//! whole loop can run against real devices or test doubles.

use crate::audio::{AudioSink, MusicStream};
use crate::consts::*;
use crate::platform::{FrameClock, InputLatch, capture};
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameState, RandomSource, TickInput, tick};

pub struct Game<R, A, M> {
    state: GameState,
    rng: R,
    audio: A,
    music: M,
}

impl<R, A, M> Game<R, A, M>
where
    R: RandomSource,
    A: AudioSink,
    M: MusicStream,
{
    /// Fresh game on the title screen
    pub fn initialize(rng: R, audio: A, mut music: M, settings: &Settings) -> Self {
        if settings.music_on_start {
            music.resume();
        } else {
            music.pause();
        }
        log::info!(
            "Game initialized ({}x{} @ {} Hz, music {})",
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            TARGET_FPS,
            if music.is_playing() { "on" } else { "off" }
        );
        Self {
            state: GameState::new(),
            rng,
            audio,
            music,
        }
    }

    /// Advance one fixed tick
    pub fn tick(&mut self, input: &TickInput) {
        self.music.update();
        if input.mute_toggle {
            self.music.toggle();
            log::info!(
                "Music {}",
                if self.music.is_playing() { "resumed" } else { "paused" }
            );
        }
        tick(&mut self.state, input, &mut self.rng, &mut self.audio);
    }

    /// Run however many fixed ticks `frame_dt` of real time pays for.
    ///
    /// Edges in `latch` are consumed by the first tick; if no tick runs they
    /// wait for the next frame.
    pub fn frame(&mut self, clock: &mut FrameClock, latch: &mut InputLatch, frame_dt: f32) -> u32 {
        let substeps = clock.advance(frame_dt);
        for _ in 0..substeps {
            let input = capture(latch);
            self.tick(&input);
            latch.clear_edges();
        }
        substeps
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        draw_frame(&self.state, renderer);
    }

    /// Stop the music and report the final tallies
    pub fn shutdown(&mut self) {
        self.music.pause();
        log::info!(
            "Shutting down after {} ticks ({:?}, score {}, {} slashed)",
            self.state.time_ticks,
            self.state.phase,
            self.state.score,
            self.state.slashed
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn music(&self) -> &M {
        &self.music
    }
}
