//! DpsBreakdown - Intermediate values of one DPS calculation

use serde::{Deserialize, Serialize};

/// Every value the DPS formula passes through, for display and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpsBreakdown {
    pub effective_attack_level: i64,
    pub attack_roll: i64,
    pub defence_roll: i64,
    /// Chance to hit, 0.0 - 1.0
    pub hit_chance: f64,
    pub effective_strength_level: i64,
    pub max_hit: i64,
    /// Expected damage of a landed hit, `max/2 + 1/(max+1)`
    pub expected_hit: f64,
    /// Attack interval in ticks
    pub attack_speed: u32,
    pub seconds_per_attack: f64,
    /// Expected damage per second
    pub dps: f64,
}

impl DpsBreakdown {
    /// Expected damage of one attack including misses
    pub fn damage_per_attack(&self) -> f64 {
        self.expected_hit * self.hit_chance
    }

    /// Hit chance as a percentage (0 - 100)
    pub fn hit_chance_percent(&self) -> f64 {
        (self.hit_chance * 100.0).clamp(0.0, 100.0)
    }
}
