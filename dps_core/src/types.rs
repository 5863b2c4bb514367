//! Core enums shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three loadouts (and level pair) an attack uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatStyle {
    Melee,
    Ranged,
    Magic,
}

impl CombatStyle {
    /// Get all combat styles
    pub fn all() -> &'static [CombatStyle] {
        &[CombatStyle::Melee, CombatStyle::Ranged, CombatStyle::Magic]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CombatStyle::Melee => "melee",
            CombatStyle::Ranged => "ranged",
            CombatStyle::Magic => "magic",
        }
    }
}

impl fmt::Display for CombatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot a piece occupies inside a loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Head,
    Body,
    Legs,
    Feet,
    Weapon,
    #[serde(rename = "spec wep", alias = "spec_weapon")]
    SpecWeapon,
    Shield,
    Ammo,
    Cape,
    Hands,
    Neck,
    Ring,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Head,
            EquipmentSlot::Body,
            EquipmentSlot::Legs,
            EquipmentSlot::Feet,
            EquipmentSlot::Weapon,
            EquipmentSlot::SpecWeapon,
            EquipmentSlot::Shield,
            EquipmentSlot::Ammo,
            EquipmentSlot::Cape,
            EquipmentSlot::Hands,
            EquipmentSlot::Neck,
            EquipmentSlot::Ring,
        ]
    }
}

/// Slot value as recorded in the item catalog.
///
/// Differs from [`EquipmentSlot`] in that two-handed weapons carry their own
/// `2h` value while still being equipped in the weapon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSlot {
    Head,
    Body,
    Legs,
    Feet,
    Weapon,
    #[serde(rename = "2h")]
    TwoHanded,
    Shield,
    Ammo,
    Cape,
    Hands,
    Neck,
    Ring,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ItemSlot {
    /// Whether an item with this slot value attacks (and so has an attack speed)
    pub fn is_weapon(&self) -> bool {
        matches!(self, ItemSlot::Weapon | ItemSlot::TwoHanded)
    }
}

/// Damage type of a stance, as named in the stance tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Stab,
    Slash,
    Crush,
    Light,
    Standard,
    Ranged,
    Heavy,
    Magic,
    #[serde(other)]
    None,
}

impl DamageType {
    /// Melee damage types draw on the stab/slash/crush bonus columns
    pub fn is_melee(&self) -> bool {
        matches!(self, DamageType::Stab | DamageType::Slash | DamageType::Crush)
    }

    pub fn is_ranged(&self) -> bool {
        matches!(
            self,
            DamageType::Light | DamageType::Standard | DamageType::Ranged | DamageType::Heavy
        )
    }
}

/// Category of a stance; decides the invisible style bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleCategory {
    Accurate,
    Aggressive,
    Defensive,
    Controlled,
    Rapid,
    Longrange,
    /// Autocast and other categories that grant no bonus
    #[serde(other)]
    Other,
}

/// Invisible level bonuses granted by a stance category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleBonuses {
    pub attack: i32,
    pub strength: i32,
    /// Ticks removed from the weapon's attack interval
    pub speed_reduction: u32,
}

impl StyleCategory {
    /// Bonus table for a stance category.
    ///
    /// Defensive, Longrange and Controlled also grant defence levels; the
    /// engine never rolls the attacker's own defence so those are dropped.
    pub fn bonuses(category: Option<StyleCategory>) -> StyleBonuses {
        match category {
            Some(StyleCategory::Accurate) => StyleBonuses {
                attack: 3,
                ..Default::default()
            },
            Some(StyleCategory::Aggressive) => StyleBonuses {
                strength: 3,
                ..Default::default()
            },
            Some(StyleCategory::Controlled) => StyleBonuses {
                attack: 1,
                strength: 1,
                ..Default::default()
            },
            Some(StyleCategory::Rapid) => StyleBonuses {
                speed_reduction: 1,
                ..Default::default()
            },
            Some(StyleCategory::Defensive)
            | Some(StyleCategory::Longrange)
            | Some(StyleCategory::Other)
            | None => StyleBonuses::default(),
        }
    }
}

/// Elemental rune a monster is weak to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Air,
    Water,
    Earth,
    Fire,
}
