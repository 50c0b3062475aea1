//! Game settings
//!
//! Defaults reproduce the classic game. An optional JSON file, named by the
//! `SHOOTING_BALLS_SETTINGS` environment variable, overrides any subset.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::pacing::frame_budget;
use crate::sim::SimConfig;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Arena (and window) width in pixels
    pub arena_width: u32,
    /// Arena (and window) height in pixels
    pub arena_height: u32,

    // === Balls ===
    /// Square side, also the annihilation distance
    pub ball_size: f32,
    /// Per-tick speed on each axis
    pub ball_speed: f32,

    // === Timing ===
    /// Target steps per second
    pub fps: u32,

    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            fps: FPS,

            window_title: WINDOW_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const ENV_VAR: &'static str = "SHOOTING_BALLS_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from the file named by `SHOOTING_BALLS_SETTINGS`, falling back
    /// to defaults when it is unset or unusable
    pub fn load() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Simulation parameters derived from these settings
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            arena_width: self.arena_width as f32,
            arena_height: self.arena_height as f32,
            ball_size: self.ball_size,
            ball_speed: self.ball_speed,
        }
    }

    /// Per-frame time budget
    pub fn frame_budget(&self) -> Duration {
        frame_budget(self.fps)
    }

    /// Window size in pixels
    pub fn window_size(&self) -> (usize, usize) {
        (self.arena_width as usize, self.arena_height as usize)
    }
}
