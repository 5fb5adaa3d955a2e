//! Simulation settings
//!
//! Loaded once at startup from a JSON file; every field has a default so a
//! partial file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_MARGIN, ENEMY_COUNT, MAX_FRAME_DELTA_MS};
use crate::error::SettingsError;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Distance past the visible area before a body wraps
    pub margin: f64,
    /// Number of enemies spawned at start
    pub enemy_count: usize,
    /// Frame deltas above this (ms) are clamped
    pub max_frame_delta_ms: f64,
    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,
    /// Give each enemy a random silhouette instead of the star
    pub mixed_enemies: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            margin: ARENA_MARGIN,
            enemy_count: ENEMY_COUNT,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            seed: None,
            mixed_enemies: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(SettingsError::Invalid {
                field: "margin",
                reason: format!("must be a non-negative number, got {}", self.margin),
            });
        }
        if !self.max_frame_delta_ms.is_finite() || self.max_frame_delta_ms <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "max_frame_delta_ms",
                reason: format!("must be positive, got {}", self.max_frame_delta_ms),
            });
        }
        Ok(())
    }

    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
