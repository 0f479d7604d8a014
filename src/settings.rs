//! Game settings
//!
//! Every tunable constant of the core. Loaded from a JSON file; missing
//! fields fall back to the defaults in [`crate::consts`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// How the motion interpolator scales its easing factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionMode {
    /// Apply `speed_factor` once per tick (speed depends on the tick period)
    #[default]
    PerTick,
    /// Scale the factor by elapsed time so speed is tick-period independent
    DeltaTime,
}

/// Which actuator position the drop's hit test uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HitPolicy {
    /// Position when the drop resolves (player may reposition mid-drop)
    #[default]
    Live,
    /// Position recorded when the drop started
    Captured,
}

impl HitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitPolicy::Live => "live",
            HitPolicy::Captured => "captured",
        }
    }
}

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("setting `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display (not used by the core) ===
    /// Playfield width in pixels
    pub playfield_width: f32,
    /// Playfield height in pixels
    pub playfield_height: f32,

    // === Motion ===
    /// Easing factor per tick, in (0, 1)
    pub speed_factor: f32,
    /// Snap distance for the roaming position
    pub snap_epsilon: f32,
    /// Motion tick period
    pub tick_ms: u64,
    /// Goal reselection period
    pub target_interval_ms: u64,
    pub motion_mode: MotionMode,

    // === Actuator / drop ===
    pub step: f32,
    pub catch_threshold: f32,
    pub drop_delay_ms: u64,
    pub effect_duration_ms: u64,
    pub hit_policy: HitPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            speed_factor: SPEED_FACTOR,
            snap_epsilon: SNAP_EPSILON,
            tick_ms: TICK_MS,
            target_interval_ms: TARGET_INTERVAL_MS,
            motion_mode: MotionMode::PerTick,

            step: ACTUATOR_STEP,
            catch_threshold: CATCH_THRESHOLD,
            drop_delay_ms: DROP_DELAY_MS,
            effect_duration_ms: EFFECT_DURATION_MS,
            hit_policy: HitPolicy::Live,
        }
    }
}

impl Settings {
    /// Check every tunable is inside its usable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let out_of_range = |field: &'static str, value: f64| ConfigError::OutOfRange { field, value };

        if !(self.speed_factor > 0.0 && self.speed_factor < 1.0) {
            return Err(out_of_range("speed_factor", self.speed_factor as f64));
        }
        for (field, value) in [
            ("snap_epsilon", self.snap_epsilon),
            ("step", self.step),
            ("catch_threshold", self.catch_threshold),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(out_of_range(field, value as f64));
            }
        }
        for (field, value) in [
            ("tick_ms", self.tick_ms),
            ("target_interval_ms", self.target_interval_ms),
            ("drop_delay_ms", self.drop_delay_ms),
            ("effect_duration_ms", self.effect_duration_ms),
        ] {
            if value == 0 {
                return Err(out_of_range(field, 0.0));
            }
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{} - using default settings", e);
                Self::default()
            }
        }
    }

    /// Convert a playfield percentage to a horizontal pixel offset
    pub fn to_pixels(&self, percent: f32) -> f32 {
        percent / POSITION_MAX * self.playfield_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tick_ms, 16);
        assert_eq!(settings.hit_policy, HitPolicy::Live);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "catch_threshold": 4.0, "hit_policy": "Captured" }"#)
            .unwrap();
        assert_eq!(settings.catch_threshold, 4.0);
        assert_eq!(settings.hit_policy, HitPolicy::Captured);
        assert_eq!(settings.step, ACTUATOR_STEP);
        assert_eq!(settings.drop_delay_ms, DROP_DELAY_MS);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = Settings::from_json(r#"{ "speed_factor": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "speed_factor", .. }));

        let err = Settings::from_json(r#"{ "tick_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "tick_ms", .. }));

        let err = Settings::from_json(r#"{ "step": -5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "step", .. }));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/penguin-settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_to_pixels() {
        let settings = Settings::default();
        assert_eq!(settings.to_pixels(0.0), 0.0);
        assert_eq!(settings.to_pixels(50.0), 195.0);
        assert_eq!(settings.to_pixels(100.0), 390.0);
    }
}
