//! Audio cues and music stream
//!
//! The simulation only emits discrete cues; the host decides how they sound.
//! On the web every sound is procedurally generated - no external files needed!

/// Discrete sound cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// A fruit was launched
    FruitSpawn,
    /// A scoring fruit was slashed
    FruitSlash,
    /// The donut was slashed
    ForbiddenSlash,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::FruitSpawn => "fruit-spawn",
            AudioCue::FruitSlash => "fruit-slash",
            AudioCue::ForbiddenSlash => "forbidden-slash",
        }
    }
}

/// Consumer of discrete cues
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Looping background music handle
pub trait MusicStream {
    /// Refill/advance the stream; called once per tick
    fn update(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_playing(&self) -> bool;

    /// Flip between paused and playing
    fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.resume();
        }
    }
}

/// Headless sink: cues only go to the log
#[derive(Debug, Default)]
pub struct LogAudio {
    played: u64,
}

impl LogAudio {
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        self.played += 1;
        log::trace!("cue {}", cue.as_str());
    }
}

/// Records every cue in order (tests and replays)
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub cues: Vec<AudioCue>,
}

impl RecordingAudio {
    pub fn count(&self, cue: AudioCue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

/// Music stream with no output, tracking only play state and updates
#[derive(Debug, Default, Clone)]
pub struct SilentMusic {
    playing: bool,
    updates: u64,
}

impl SilentMusic {
    pub fn new(playing: bool) -> Self {
        Self {
            playing,
            updates: 0,
        }
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl MusicStream for SilentMusic {
    fn update(&mut self) {
        self.updates += 1;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn resume(&mut self) {
        self.playing = true;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{WebAudio, WebMusic};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::rc::Rc;

    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioCue, AudioSink, MusicStream};

    /// Create an oscillator routed through its own gain node into `dest`
    fn create_osc(
        ctx: &AudioContext,
        dest: &web_sys::AudioNode,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(dest).ok()?;

        Some((osc, gain))
    }

    /// Web Audio cue player
    pub struct WebAudio {
        ctx: Option<Rc<AudioContext>>,
        volume: f32,
    }

    impl WebAudio {
        /// `gain` is the effective sound effect volume
        pub fn new(ctx: Option<Rc<AudioContext>>, gain: f32) -> Self {
            Self {
                ctx,
                volume: gain.clamp(0.0, 1.0),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume_context(&self) {
            if let Some(ctx) = &self.ctx {
                if ctx.state() == web_sys::AudioContextState::Suspended {
                    let _ = ctx.resume();
                }
            }
        }

        /// Spawn - short rising whoosh
        fn play_spawn(&self, ctx: &AudioContext, vol: f32) {
            let dest = ctx.destination();
            let Some((osc, gain)) = create_osc(ctx, &dest, 200.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency().set_value_at_time(200.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(500.0, t + 0.12)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.2).ok();
        }

        /// Slash - bright swish with a juicy thump
        fn play_slash(&self, ctx: &AudioContext, vol: f32) {
            let dest = ctx.destination();
            let t = ctx.current_time();

            if let Some((osc, gain)) = create_osc(ctx, &dest, 2500.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.15, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                    .ok();
                osc.frequency().set_value_at_time(2500.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(800.0, t + 0.08)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.1).ok();
            }

            if let Some((osc, gain)) = create_osc(ctx, &dest, 120.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.4, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.15).ok();
            }
        }

        /// Forbidden - sad descending
        fn play_forbidden(&self, ctx: &AudioContext, vol: f32) {
            let dest = ctx.destination();
            for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
                let delay = i as f64 * 0.2;
                if let Some((osc, gain)) = create_osc(ctx, &dest, *freq, OscillatorType::Sine) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.4).ok();
                }
            }
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: AudioCue) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            match cue {
                AudioCue::FruitSpawn => self.play_spawn(ctx, self.volume),
                AudioCue::FruitSlash => self.play_slash(ctx, self.volume),
                AudioCue::ForbiddenSlash => self.play_forbidden(ctx, self.volume),
            }
        }
    }

    /// Arpeggio steps in Hz (A minor)
    const MUSIC_NOTES: [f32; 8] = [220.0, 261.63, 329.63, 261.63, 196.0, 246.94, 293.66, 246.94];
    /// Seconds per arpeggio step
    const MUSIC_STEP: f64 = 0.25;

    /// Procedural looping arpeggio over a drone
    pub struct WebMusic {
        ctx: Option<Rc<AudioContext>>,
        lead: Option<(OscillatorNode, GainNode)>,
        bus: Option<GainNode>,
        volume: f32,
        playing: bool,
        step: usize,
        next_step_at: f64,
    }

    impl WebMusic {
        /// `gain` is the effective music volume
        pub fn new(ctx: Option<Rc<AudioContext>>, gain: f32) -> Self {
            let volume = gain.clamp(0.0, 1.0);
            let mut music = Self {
                ctx,
                lead: None,
                bus: None,
                volume,
                playing: false,
                step: 0,
                next_step_at: 0.0,
            };
            music.build_graph();
            music
        }

        fn build_graph(&mut self) {
            let Some(ctx) = &self.ctx else { return };
            let Ok(bus) = ctx.create_gain() else {
                log::warn!("Failed to create music bus - music disabled");
                return;
            };
            bus.gain().set_value(0.0);
            if bus.connect_with_audio_node(&ctx.destination()).is_err() {
                return;
            }

            if let Some((drone, gain)) = create_osc(ctx, &bus, 110.0, OscillatorType::Sine) {
                gain.gain().set_value(0.15);
                drone.start().ok();
            }
            if let Some((lead, gain)) = create_osc(ctx, &bus, MUSIC_NOTES[0], OscillatorType::Triangle)
            {
                gain.gain().set_value(0.08);
                lead.start().ok();
                self.lead = Some((lead, gain));
            }
            self.bus = Some(bus);
        }
    }

    impl MusicStream for WebMusic {
        fn update(&mut self) {
            if !self.playing {
                return;
            }
            let (Some(ctx), Some((lead, _))) = (&self.ctx, &self.lead) else {
                return;
            };
            let now = ctx.current_time();
            if now < self.next_step_at {
                return;
            }
            self.step = (self.step + 1) % MUSIC_NOTES.len();
            lead.frequency()
                .set_value_at_time(MUSIC_NOTES[self.step], now)
                .ok();
            self.next_step_at = now + MUSIC_STEP;
        }

        fn pause(&mut self) {
            if let Some(bus) = &self.bus {
                bus.gain().set_value(0.0);
            }
            self.playing = false;
        }

        fn resume(&mut self) {
            if let Some(bus) = &self.bus {
                bus.gain().set_value(self.volume);
            }
            self.playing = true;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(AudioCue::FruitSpawn.as_str(), "fruit-spawn");
        assert_eq!(AudioCue::FruitSlash.as_str(), "fruit-slash");
        assert_eq!(AudioCue::ForbiddenSlash.as_str(), "forbidden-slash");
    }

    #[test]
    fn test_toggle_twice_restores_play_state() {
        let mut music = SilentMusic::new(true);
        music.toggle();
        assert!(!music.is_playing());
        music.toggle();
        assert!(music.is_playing());

        let mut muted = SilentMusic::new(false);
        muted.toggle();
        muted.toggle();
        assert!(!muted.is_playing());
    }

    #[test]
    fn test_recording_audio_counts() {
        let mut audio = RecordingAudio::default();
        audio.play(AudioCue::FruitSpawn);
        audio.play(AudioCue::FruitSlash);
        audio.play(AudioCue::FruitSpawn);
        assert_eq!(audio.count(AudioCue::FruitSpawn), 2);
        audio.clear();
        assert!(audio.cues.is_empty());
    }
}
