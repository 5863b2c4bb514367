//! CharacterLevels - The attacker's combat skill levels

use crate::types::CombatStyle;
use serde::{Deserialize, Serialize};

/// Combat levels, potion boosts already applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterLevels {
    pub attack: u32,
    pub strength: u32,
    pub defence: u32,
    pub hitpoints: u32,
    pub ranged: u32,
    pub prayer: u32,
    pub magic: u32,
}

impl CharacterLevels {
    /// Every combat skill at the same level
    pub fn all(level: u32) -> Self {
        CharacterLevels {
            attack: level,
            strength: level,
            defence: level,
            hitpoints: level,
            ranged: level,
            prayer: level,
            magic: level,
        }
    }

    /// Levels feeding the accuracy and max hit rolls of a combat style.
    ///
    /// Magic max hits come from spells, not a level, so the strength side is 1.
    pub fn offensive_pair(&self, style: CombatStyle) -> (u32, u32) {
        match style {
            CombatStyle::Melee => (self.attack, self.strength),
            CombatStyle::Ranged => (self.ranged, self.ranged),
            CombatStyle::Magic => (self.magic, 1),
        }
    }
}

impl Default for CharacterLevels {
    /// A fresh account
    fn default() -> Self {
        CharacterLevels {
            hitpoints: 10,
            ..CharacterLevels::all(1)
        }
    }
}
