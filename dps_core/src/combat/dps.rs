//! DPS aggregation - Expected damage over real time
//!
//! `dps = (max/2 + 1/(max+1)) * hit_chance / (attack_speed * 0.6)`

use super::accuracy::{
    calculate_attack_roll, calculate_defence_roll, calculate_effective_attack_level,
    calculate_hit_chance, AccuracyInput,
};
use super::max_hit::{calculate_effective_strength_level, calculate_max_hit, MaxHitInput};
use super::result::DpsBreakdown;
use crate::config::CombatConstants;
use crate::error::DpsError;
use serde::{Deserialize, Serialize};

/// Everything needed to evaluate one attack pattern against one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpsInput {
    pub accuracy: AccuracyInput,
    pub max_hit: MaxHitInput,
    /// Ticks between attacks, must be at least 1
    pub attack_speed: u32,
}

impl Default for DpsInput {
    fn default() -> Self {
        DpsInput {
            accuracy: AccuracyInput::default(),
            max_hit: MaxHitInput::default(),
            attack_speed: 4,
        }
    }
}

/// Calculate expected DPS with the standard tick length
pub fn calculate_dps(input: &DpsInput) -> Result<f64, DpsError> {
    Ok(calculate_dps_breakdown(input, &CombatConstants::default())?.dps)
}

/// Calculate expected DPS with custom constants
pub fn calculate_dps_with(input: &DpsInput, constants: &CombatConstants) -> Result<f64, DpsError> {
    Ok(calculate_dps_breakdown(input, constants)?.dps)
}

/// Calculate DPS and keep every intermediate value
pub fn calculate_dps_breakdown(
    input: &DpsInput,
    constants: &CombatConstants,
) -> Result<DpsBreakdown, DpsError> {
    if input.attack_speed == 0 {
        return Err(DpsError::InvalidAttackSpeed(input.attack_speed));
    }

    let hit_chance = calculate_hit_chance(&input.accuracy);
    let max_hit = calculate_max_hit(&input.max_hit);

    // A max hit of 0 still yields 1/(0+1); the formula is kept as is
    let max = max_hit as f64;
    let expected_hit = max / 2.0 + 1.0 / (max + 1.0);
    let seconds_per_attack = input.attack_speed as f64 * constants.tick_seconds;

    Ok(DpsBreakdown {
        effective_attack_level: calculate_effective_attack_level(&input.accuracy),
        attack_roll: calculate_attack_roll(&input.accuracy),
        defence_roll: calculate_defence_roll(&input.accuracy),
        hit_chance,
        effective_strength_level: calculate_effective_strength_level(&input.max_hit),
        max_hit,
        expected_hit,
        attack_speed: input.attack_speed,
        seconds_per_attack,
        dps: expected_hit * hit_chance / seconds_per_attack,
    })
}
