//! Combat constants configuration

use super::ConfigError;
use crate::combat::constants::TICK_SECONDS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable constants and fallbacks used when assembling and scoring attacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Real-world seconds per game tick
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: f64,
    /// Attack interval when no weapon is equipped (punching)
    #[serde(default = "default_attack_speed")]
    pub default_attack_speed: u32,
    /// Fastest possible attack interval after stance adjustments
    #[serde(default = "default_min_attack_speed")]
    pub min_attack_speed: u32,
    /// Defence level assumed when no target is selected
    #[serde(default = "default_dummy_defence_level")]
    pub dummy_defence_level: u32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            tick_seconds: TICK_SECONDS,
            default_attack_speed: 4,
            min_attack_speed: 1,
            dummy_defence_level: 1,
        }
    }
}

fn default_tick_seconds() -> f64 {
    TICK_SECONDS
}
fn default_attack_speed() -> u32 {
    4
}
fn default_min_attack_speed() -> u32 {
    1
}
fn default_dummy_defence_level() -> u32 {
    1
}

impl CombatConstants {
    /// Check the constants can't produce a zero or negative attack interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_seconds.is_finite() || self.tick_seconds <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }
        if self.min_attack_speed == 0 {
            return Err(ConfigError::ValidationError(
                "min_attack_speed must be at least 1".to_string(),
            ));
        }
        if self.default_attack_speed < self.min_attack_speed {
            return Err(ConfigError::ValidationError(format!(
                "default_attack_speed {} is below min_attack_speed {}",
                self.default_attack_speed, self.min_attack_speed
            )));
        }
        Ok(())
    }

    /// Load and validate constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse and validate constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }
}
