//! Accuracy - Attack roll vs defence roll
//!
//! The attacker and the defender each produce a roll; the probability of a
//! successful hit follows from comparing the two:
//!
//! - attack > defence: `1 - (def + 2) / (2 * (att + 1))`
//! - otherwise:        `att / (2 * (def + 1))`
//!
//! Magic accuracy uses a different defence roll and is not modelled.

use super::constants::{DEFENCE_LEVEL_OFFSET, EFFECTIVE_LEVEL_BONUS, ROLL_BONUS_OFFSET};
use serde::{Deserialize, Serialize};

/// Attacker and defender parameters for one accuracy check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyInput {
    /// Attack (or Ranged/Magic) level including potion boosts
    pub visible_attack_level: u32,
    /// e.g. 1.20 for Piety
    #[serde(default = "default_multiplier")]
    pub attack_prayer_multiplier: f64,
    /// Product of gear set effects such as void
    #[serde(default = "default_multiplier")]
    pub other_attack_multiplier: f64,
    /// Invisible stance bonus: 3 accurate, 1 controlled, else 0
    #[serde(default)]
    pub attack_style_bonus: i32,
    /// Summed gear bonus for the stance's damage type
    #[serde(default)]
    pub equipment_attack_bonus: i32,
    pub target_defence_level: u32,
    /// Target's defence bonus against the stance's damage type
    #[serde(default)]
    pub target_style_defence_bonus: i32,
}

fn default_multiplier() -> f64 {
    1.0
}

impl AccuracyInput {
    /// Create an input with every modifier at its neutral value
    pub fn new(visible_attack_level: u32, target_defence_level: u32) -> Self {
        AccuracyInput {
            visible_attack_level,
            attack_prayer_multiplier: 1.0,
            other_attack_multiplier: 1.0,
            attack_style_bonus: 0,
            equipment_attack_bonus: 0,
            target_defence_level,
            target_style_defence_bonus: 0,
        }
    }
}

impl Default for AccuracyInput {
    fn default() -> Self {
        AccuracyInput::new(1, 1)
    }
}

/// Effective attack level.
///
/// The prayer multiplier is floored on its own before the style bonus and
/// the +8 are added, then the result is multiplied and floored again.
pub fn calculate_effective_attack_level(input: &AccuracyInput) -> i64 {
    let prayed = (input.visible_attack_level as f64 * input.attack_prayer_multiplier).floor();
    let base = prayed + input.attack_style_bonus as f64 + EFFECTIVE_LEVEL_BONUS;
    (base * input.other_attack_multiplier).floor() as i64
}

/// Calculate the attacker's roll.
///
/// Saturates at `i64::MAX` for levels or multipliers far outside the game.
pub fn calculate_attack_roll(input: &AccuracyInput) -> i64 {
    let effective = calculate_effective_attack_level(input);
    effective.saturating_mul(input.equipment_attack_bonus as i64 + ROLL_BONUS_OFFSET)
}

/// Calculate the target's roll against the stance's damage type
pub fn calculate_defence_roll(input: &AccuracyInput) -> i64 {
    (input.target_defence_level as i64 + DEFENCE_LEVEL_OFFSET)
        .saturating_mul(input.target_style_defence_bonus as i64 + ROLL_BONUS_OFFSET)
}

/// Chance for a single attack to land, in `[0, 1]`
pub fn calculate_hit_chance(input: &AccuracyInput) -> f64 {
    let attack_roll = calculate_attack_roll(input) as f64;
    let defence_roll = calculate_defence_roll(input) as f64;

    let chance = if attack_roll > defence_roll {
        1.0 - (defence_roll + 2.0) / (2.0 * (attack_roll + 1.0))
    } else {
        attack_roll / (2.0 * (defence_roll + 1.0))
    };

    // Negative bonuses can push a roll below zero
    chance.clamp(0.0, 1.0)
}
