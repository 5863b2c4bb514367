//! EquipmentBonuses - Summed gear stats of a loadout

use super::{EquipmentStats, Loadout};
use crate::types::{CombatStyle, DamageType};
use serde::{Deserialize, Serialize};

/// Totals of every equipment bonus column
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EquipmentBonuses {
    pub attack_stab: i32,
    pub attack_slash: i32,
    pub attack_crush: i32,
    pub attack_magic: i32,
    pub attack_ranged: i32,
    pub defence_stab: i32,
    pub defence_slash: i32,
    pub defence_crush: i32,
    pub defence_magic: i32,
    pub defence_ranged: i32,
    pub melee_strength: i32,
    pub ranged_strength: i32,
    pub magic_damage: f64,
    pub prayer: i32,
}

impl EquipmentBonuses {
    /// Sum the bonuses of every contributing item in a loadout
    pub fn from_loadout(loadout: &Loadout) -> Self {
        let mut totals = EquipmentBonuses::default();
        for (_, piece) in loadout.contributing() {
            totals.add(&piece.stats);
        }
        totals
    }

    /// Add one item's stats to the totals
    pub fn add(&mut self, stats: &EquipmentStats) {
        self.attack_stab += stats.stab_attack;
        self.attack_slash += stats.slash_attack;
        self.attack_crush += stats.crush_attack;
        self.attack_magic += stats.magic_attack;
        self.attack_ranged += stats.ranged_attack;
        self.defence_stab += stats.stab_defence;
        self.defence_slash += stats.slash_defence;
        self.defence_crush += stats.crush_defence;
        self.defence_magic += stats.magic_defence;
        self.defence_ranged += stats.ranged_defence;
        self.melee_strength += stats.melee_strength;
        self.ranged_strength += stats.ranged_strength;
        self.magic_damage += stats.magic_damage;
        self.prayer += stats.prayer;
    }

    /// Attack bonus for a single damage type.
    ///
    /// Melee types read exactly one column; they are never summed.
    pub fn attack_bonus(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Stab => self.attack_stab,
            DamageType::Slash => self.attack_slash,
            DamageType::Crush => self.attack_crush,
            DamageType::Light | DamageType::Standard | DamageType::Ranged | DamageType::Heavy => {
                self.attack_ranged
            }
            DamageType::Magic => self.attack_magic,
            DamageType::None => 0,
        }
    }

    /// Strength bonus used by a combat style's max hit.
    ///
    /// Magic damage is a percentage bonus outside this model, so magic gets 0.
    pub fn strength_bonus(&self, style: CombatStyle) -> i32 {
        match style {
            CombatStyle::Melee => self.melee_strength,
            CombatStyle::Ranged => self.ranged_strength,
            CombatStyle::Magic => 0,
        }
    }

    /// Named rows in display order
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("attack stab", self.attack_stab as f64),
            ("attack slash", self.attack_slash as f64),
            ("attack crush", self.attack_crush as f64),
            ("attack magic", self.attack_magic as f64),
            ("attack ranged", self.attack_ranged as f64),
            ("defence stab", self.defence_stab as f64),
            ("defence slash", self.defence_slash as f64),
            ("defence crush", self.defence_crush as f64),
            ("defence magic", self.defence_magic as f64),
            ("defence ranged", self.defence_ranged as f64),
            ("melee strength", self.melee_strength as f64),
            ("ranged strength", self.ranged_strength as f64),
            ("magic damage", self.magic_damage),
            ("prayer", self.prayer as f64),
        ]
    }
}
