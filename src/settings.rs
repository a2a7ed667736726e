//! Behavior tuning
//!
//! Loaded from JSON; every field falls back to its default when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, non_negative};
use crate::sim::{ShieldConfig, ThrowConfig};

/// Maze puzzle tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleSettings {
    /// Ball speed in units/second at full axis deflection
    pub ball_speed: f32,
    /// Distance to the target that counts as solved
    pub success_threshold: f32,
    /// Remove the gate instantly instead of sliding it open
    pub make_gate_disappear: bool,
    pub gate_speed: f32,
    pub gate_open_height: f32,
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            ball_speed: 5.0,
            success_threshold: 1.0,
            make_gate_disappear: true,
            gate_speed: 2.0,
            gate_open_height: 5.0,
        }
    }
}

impl PuzzleSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.success_threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.success_threshold));
        }
        non_negative("ball_speed", self.ball_speed)?;
        non_negative("gate_speed", self.gate_speed)?;
        Ok(())
    }
}

/// All behavior tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shield: ShieldConfig,
    pub bomb: ThrowConfig,
    pub puzzle: PuzzleSettings,
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub move_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self { move_speed: 5.0 }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shield.validate()?;
        self.bomb.validate()?;
        self.puzzle.validate()?;
        non_negative("move_speed", self.player.move_speed)?;
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "shield": { "regen_delay": 4.0 } }"#).unwrap();
        assert_eq!(s.shield.regen_delay, 4.0);
        assert_eq!(s.shield.max_durability, 100.0);
        assert_eq!(s.bomb.cooldown, 3.0);
        assert!(s.puzzle.make_gate_disappear);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "shield": { "max_durability": -5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveDurability(_)));

        let err = Settings::from_json(r#"{ "puzzle": { "success_threshold": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveThreshold(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_tuning() {
        let mut s = Settings::default();
        s.bomb.throw_power = 11.0;
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/bomb-shield.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
