//! Game settings and preferences
//!
//! Read once at startup; never written back.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Start the music stream on launch
    pub music_on_start: bool,

    // === Simulation ===
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Native host ===
    /// Length of the headless demo run in seconds
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            music_on_start: true,
            seed: None,
            demo_seconds: 60.0,
        }
    }
}

impl Settings {
    /// Environment variable holding settings JSON (native)
    pub const ENV_VAR: &'static str = "FRUIT_SLASH_SETTINGS";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "fruit_slash_settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings JSON, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", err);
                Self::default()
            }
        }
    }

    /// Sound effect gain after master volume
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }

    /// Music gain after master volume
    pub fn effective_music_volume(&self) -> f32 {
        (self.master_volume.clamp(0.0, 1.0) * self.music_volume.clamp(0.0, 1.0)).clamp(0.0, 1.0)
    }

    /// Demo length in whole ticks
    pub fn demo_ticks(&self) -> u64 {
        (self.demo_seconds.max(0.0) * crate::consts::TARGET_FPS as f32) as u64
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => {
                log::info!("Loaded settings from {}", Self::ENV_VAR);
                Self::from_json_or_default(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "music_on_start": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.music_on_start);
        assert_eq!(settings.master_volume, Settings::default().master_volume);
        assert_eq!(settings.demo_seconds, 60.0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(Settings::from_json("{ nope").is_err());
        assert_eq!(Settings::from_json_or_default("{ nope"), Settings::default());
    }

    #[test]
    fn test_volumes_are_clamped() {
        let settings = Settings {
            master_volume: 2.0,
            sfx_volume: 0.5,
            music_volume: -1.0,
            ..Default::default()
        };
        assert_eq!(settings.effective_sfx_volume(), 0.5);
        assert_eq!(settings.effective_music_volume(), 0.0);

        // An over-range master must not boost the product past the channel
        let loud = Settings {
            master_volume: 2.0,
            sfx_volume: 0.4,
            music_volume: 0.4,
            ..Default::default()
        };
        assert_eq!(loud.effective_sfx_volume(), 0.4);
        assert_eq!(loud.effective_music_volume(), 0.4);
    }

    #[test]
    fn test_demo_ticks() {
        let settings = Settings {
            demo_seconds: 2.5,
            ..Default::default()
        };
        assert_eq!(settings.demo_ticks(), 150);
    }
}
