//! Max hit - Highest damage a successful hit can roll

use super::constants::{EFFECTIVE_LEVEL_BONUS, MAX_HIT_DIVISOR, ROLL_BONUS_OFFSET};
use serde::{Deserialize, Serialize};

/// Strength parameters for one max hit calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxHitInput {
    /// Strength (or Ranged) level including potion boosts
    pub visible_strength_level: u32,
    #[serde(default = "default_multiplier")]
    pub strength_prayer_multiplier: f64,
    /// Invisible stance bonus: 3 aggressive, 1 controlled, else 0
    #[serde(default)]
    pub strength_style_bonus: i32,
    #[serde(default = "default_multiplier")]
    pub other_strength_multiplier: f64,
    /// Summed melee or ranged strength from gear
    #[serde(default)]
    pub equipment_strength_bonus: i32,
}

fn default_multiplier() -> f64 {
    1.0
}

impl MaxHitInput {
    pub fn new(visible_strength_level: u32) -> Self {
        MaxHitInput {
            visible_strength_level,
            strength_prayer_multiplier: 1.0,
            strength_style_bonus: 0,
            other_strength_multiplier: 1.0,
            equipment_strength_bonus: 0,
        }
    }
}

impl Default for MaxHitInput {
    fn default() -> Self {
        MaxHitInput::new(1)
    }
}

/// Effective strength level.
///
/// Unlike the attack side, the style bonus and +8 go inside the first
/// floor together with the prayer-boosted level.
pub fn calculate_effective_strength_level(input: &MaxHitInput) -> i64 {
    let base = (input.visible_strength_level as f64 * input.strength_prayer_multiplier
        + input.strength_style_bonus as f64
        + EFFECTIVE_LEVEL_BONUS)
        .floor();
    (base * input.other_strength_multiplier).floor() as i64
}

/// Calculate the max hit, rounded half up.
///
/// Never negative; saturates for levels or multipliers far outside the game.
pub fn calculate_max_hit(input: &MaxHitInput) -> i64 {
    let effective = calculate_effective_strength_level(input);
    let scaled =
        effective.saturating_mul(input.equipment_strength_bonus as i64 + ROLL_BONUS_OFFSET) as f64;
    ((0.5 + scaled / MAX_HIT_DIVISOR).floor() as i64).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_hit_no_gear() {
        // effective 107, floor(0.5 + 107 * 64 / 640) = floor(11.2) = 11
        let input = MaxHitInput::new(99);
        assert_eq!(calculate_effective_strength_level(&input), 107);
        assert_eq!(calculate_max_hit(&input), 11);
    }

    #[test]
    fn test_max_hit_maxed_melee() {
        // Aggressive, Piety, +118 strength: floor(99 * 1.23 + 3 + 8) = floor(132.77) = 132
        let input = MaxHitInput {
            visible_strength_level: 99,
            strength_prayer_multiplier: 1.23,
            strength_style_bonus: 3,
            other_strength_multiplier: 1.0,
            equipment_strength_bonus: 118,
        };
        assert_eq!(calculate_effective_strength_level(&input), 132);
        // 132 * 182 / 640 = 37.5375 -> floor(38.0375) = 38
        assert_eq!(calculate_max_hit(&input), 38);
    }

    #[test]
    fn test_rounds_half_up() {
        // effective 10 * 96 / 640 = 1.5 -> 2
        let mut input = MaxHitInput::new(2);
        input.equipment_strength_bonus = 32;
        assert_eq!(calculate_max_hit(&input), 2);
    }

    #[test]
    fn test_style_bonus_inside_first_floor() {
        // 75 * 1.15 = 86.25; 86.25 + 3 + 8 = 97.25 -> 97
        let mut input = MaxHitInput::new(75);
        input.strength_prayer_multiplier = 1.15;
        input.strength_style_bonus = 3;
        assert_eq!(calculate_effective_strength_level(&input), 97);
    }

    #[test]
    fn test_low_level_max_hit() {
        // effective 9 * 64 / 640 = 0.9 -> floor(1.4) = 1
        assert_eq!(calculate_max_hit(&MaxHitInput::new(1)), 1);
        // effective 8 * 32 / 640 = 0.4 -> floor(0.9) = 0
        let mut input = MaxHitInput::new(0);
        input.equipment_strength_bonus = -32;
        assert_eq!(calculate_max_hit(&input), 0);
    }

    #[test]
    fn test_extreme_inputs_saturate() {
        let mut input = MaxHitInput::new(u32::MAX);
        input.equipment_strength_bonus = i32::MAX;
        let max_hit = calculate_max_hit(&input);
        assert!(max_hit > 0);
        assert_eq!(max_hit, (i64::MAX as f64 / 640.0 + 0.5).floor() as i64);

        let input = MaxHitInput {
            other_strength_multiplier: 1e300,
            ..MaxHitInput::new(99)
        };
        assert_eq!(calculate_effective_strength_level(&input), i64::MAX);
        assert!(calculate_max_hit(&input) > 0);
    }

    #[test]
    fn test_negative_bonus_floors_at_zero() {
        // 107 * -36 / 640 = -6.02, floored to 0
        let mut input = MaxHitInput::new(99);
        input.equipment_strength_bonus = -100;
        assert_eq!(calculate_max_hit(&input), 0);
    }
}
