//! Offensive prayers and their level multipliers

use crate::types::CombatStyle;
use serde::{Deserialize, Serialize};

/// Offensive prayer active while attacking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    #[default]
    None,
    /// Melee: +15% attack, +18% strength
    Chivalry,
    /// Melee: +20% attack, +23% strength
    Piety,
    /// Ranged: +15% accuracy and damage
    EagleEye,
    /// Ranged: +20% accuracy, +23% damage
    Rigour,
    /// Magic: +15% accuracy
    MysticMight,
    /// Magic: +25% accuracy
    Augury,
}

impl Prayer {
    /// Style the prayer boosts, `None` for no prayer
    pub fn style(&self) -> Option<CombatStyle> {
        match self {
            Prayer::None => None,
            Prayer::Chivalry | Prayer::Piety => Some(CombatStyle::Melee),
            Prayer::EagleEye | Prayer::Rigour => Some(CombatStyle::Ranged),
            Prayer::MysticMight | Prayer::Augury => Some(CombatStyle::Magic),
        }
    }

    /// (accuracy, strength) multipliers
    pub fn multipliers(&self) -> (f64, f64) {
        match self {
            Prayer::None => (1.0, 1.0),
            Prayer::Chivalry => (1.15, 1.18),
            Prayer::Piety => (1.20, 1.23),
            Prayer::EagleEye => (1.15, 1.15),
            Prayer::Rigour => (1.20, 1.23),
            Prayer::MysticMight => (1.15, 1.0),
            Prayer::Augury => (1.25, 1.0),
        }
    }

    /// Multipliers when attacking with `style`; a prayer for another style does nothing
    pub fn multipliers_for(&self, style: CombatStyle) -> (f64, f64) {
        if self.style() == Some(style) {
            self.multipliers()
        } else {
            (1.0, 1.0)
        }
    }
}
