//! LoadoutParameterBuilder - Fluent assembly of a DpsInput

use super::{DpsBuild, Prayer};
use crate::combat::{AccuracyInput, DpsInput, MaxHitInput};
use crate::config::CombatConstants;
use crate::equipment::{EquipmentBonuses, Loadout};
use crate::error::IncompleteInput;
use crate::levels::CharacterLevels;
use crate::stance::Stance;
use crate::target::MonsterVariant;
use crate::types::{CombatStyle, DamageType};
use tracing::debug;

/// Assembles a [`DpsInput`] from one loadout and its surroundings
#[derive(Debug, Clone)]
pub struct LoadoutParameterBuilder<'a> {
    loadout: &'a Loadout,
    style: CombatStyle,
    stance: Option<&'a Stance>,
    target: Option<&'a MonsterVariant>,
    levels: CharacterLevels,
    prayer: Prayer,
    other_attack_multiplier: f64,
    other_strength_multiplier: f64,
    constants: CombatConstants,
}

impl<'a> LoadoutParameterBuilder<'a> {
    pub fn new(loadout: &'a Loadout, style: CombatStyle) -> Self {
        LoadoutParameterBuilder {
            loadout,
            style,
            stance: None,
            target: None,
            levels: CharacterLevels::default(),
            prayer: Prayer::None,
            other_attack_multiplier: 1.0,
            other_strength_multiplier: 1.0,
            constants: CombatConstants::default(),
        }
    }

    pub fn stance(mut self, stance: Option<&'a Stance>) -> Self {
        self.stance = stance;
        self
    }

    pub fn target(mut self, target: Option<&'a MonsterVariant>) -> Self {
        self.target = target;
        self
    }

    pub fn levels(mut self, levels: CharacterLevels) -> Self {
        self.levels = levels;
        self
    }

    pub fn prayer(mut self, prayer: Prayer) -> Self {
        self.prayer = prayer;
        self
    }

    /// Set effect multipliers such as void (1.1 / 1.1) or a slayer helm (7/6)
    pub fn other_multipliers(mut self, attack: f64, strength: f64) -> Self {
        self.other_attack_multiplier = attack;
        self.other_strength_multiplier = strength;
        self
    }

    pub fn constants(mut self, constants: CombatConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn build(&self) -> DpsBuild {
        let mut missing = Vec::new();

        let (attack_level, strength_level) = self.levels.offensive_pair(self.style);
        let (attack_prayer, strength_prayer) = self.prayer.multipliers_for(self.style);
        let bonuses = EquipmentBonuses::from_loadout(self.loadout);

        // Without a stance there is no damage type to pick bonuses for
        let (equipment_attack_bonus, equipment_strength_bonus, style_bonuses) = match self.stance {
            Some(stance) => (
                self.attack_bonus(&bonuses, stance.damage_type),
                bonuses.strength_bonus(self.style),
                stance.style_bonuses(),
            ),
            None => {
                missing.push(IncompleteInput::Stance);
                (0, 0, Default::default())
            }
        };

        let attack_speed = self.attack_speed(style_bonuses.speed_reduction, &mut missing);

        let damage_type = self.stance.map(|stance| stance.damage_type);
        let (target_defence_level, target_style_defence_bonus) = match self.target {
            Some(target) => (
                target.defence_level,
                damage_type.map_or(0, |dt| target.defence_bonus(dt)),
            ),
            None => {
                missing.push(IncompleteInput::Target);
                (self.constants.dummy_defence_level, 0)
            }
        };

        debug!(
            style = %self.style,
            stance = self.stance.map(|s| s.name.as_str()),
            attack_bonus = equipment_attack_bonus,
            strength_bonus = equipment_strength_bonus,
            attack_speed,
            missing = missing.len(),
            "Built dps input"
        );

        DpsBuild {
            input: DpsInput {
                accuracy: AccuracyInput {
                    visible_attack_level: attack_level,
                    attack_prayer_multiplier: attack_prayer,
                    other_attack_multiplier: self.other_attack_multiplier,
                    attack_style_bonus: style_bonuses.attack,
                    equipment_attack_bonus,
                    target_defence_level,
                    target_style_defence_bonus,
                },
                max_hit: MaxHitInput {
                    visible_strength_level: strength_level,
                    strength_prayer_multiplier: strength_prayer,
                    strength_style_bonus: style_bonuses.strength,
                    other_strength_multiplier: self.other_strength_multiplier,
                    equipment_strength_bonus,
                },
                attack_speed,
            },
            missing,
        }
    }

    /// Gear attack bonus for the stance's damage type, within this style's
    /// bonus channel (melee columns for melee, ranged for ranged, magic for magic)
    fn attack_bonus(&self, bonuses: &EquipmentBonuses, damage_type: DamageType) -> i32 {
        let in_channel = match self.style {
            CombatStyle::Melee => damage_type.is_melee(),
            CombatStyle::Ranged => damage_type.is_ranged(),
            CombatStyle::Magic => damage_type == DamageType::Magic,
        };
        if in_channel {
            bonuses.attack_bonus(damage_type)
        } else {
            0
        }
    }

    fn attack_speed(&self, reduction: u32, missing: &mut Vec<IncompleteInput>) -> u32 {
        let base = match self.loadout.weapon() {
            Some(weapon) if weapon.stats.slot.is_weapon() => weapon
                .stats
                .speed
                .unwrap_or(self.constants.default_attack_speed),
            Some(_) => self.constants.default_attack_speed,
            None => {
                missing.push(IncompleteInput::Weapon);
                self.constants.default_attack_speed
            }
        };
        // At least one tick, even with constants that skipped validation
        base.saturating_sub(reduction)
            .max(self.constants.min_attack_speed.max(1))
    }
}
