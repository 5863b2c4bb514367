//! Stance comparison - DPS of every selected stance of every loadout

use crate::builder::{LoadoutParameterBuilder, Prayer};
use crate::catalog::StanceLookup;
use crate::combat::{calculate_dps_breakdown, DpsBreakdown};
use crate::config::CombatConstants;
use crate::equipment::Loadouts;
use crate::error::{DpsError, IncompleteInput};
use crate::levels::CharacterLevels;
use crate::stance::resolve_stance;
use crate::target::MonsterVariant;
use crate::types::CombatStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Stance indices picked for comparison, per combat style
pub type StanceSelections = BTreeMap<CombatStyle, Vec<usize>>;

/// One bar of the comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DpsEntry {
    /// e.g. "melee-stance-0"
    pub id: String,
    /// e.g. "melee (Stance 1)"
    pub label: String,
    pub style: CombatStyle,
    pub stance_index: usize,
    /// Resolved stance name, if the weapon has one at that index
    pub stance_name: Option<String>,
    pub breakdown: DpsBreakdown,
    pub missing: Vec<IncompleteInput>,
}

impl DpsEntry {
    pub fn dps(&self) -> f64 {
        self.breakdown.dps
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Shared context for a comparison run
#[derive(Debug, Clone, Default)]
pub struct ComparisonContext<'a> {
    pub target: Option<&'a MonsterVariant>,
    pub levels: CharacterLevels,
    pub prayers: BTreeMap<CombatStyle, Prayer>,
    pub constants: CombatConstants,
}

/// Evaluate each selected stance of each loadout, in style then selection order
pub fn compare_stances(
    loadouts: &Loadouts,
    selections: &StanceSelections,
    stances: &impl StanceLookup,
    context: &ComparisonContext<'_>,
) -> Result<Vec<DpsEntry>, DpsError> {
    let mut entries = Vec::new();

    for style in CombatStyle::all() {
        let Some(indices) = selections.get(style) else {
            continue;
        };
        let loadout = loadouts.get(*style);

        for &index in indices {
            let stance = resolve_stance(loadout, stances, index);
            let build = LoadoutParameterBuilder::new(loadout, *style)
                .stance(stance)
                .target(context.target)
                .levels(context.levels)
                .prayer(context.prayers.get(style).copied().unwrap_or_default())
                .constants(context.constants.clone())
                .build();
            let breakdown = calculate_dps_breakdown(&build.input, &context.constants)?;

            entries.push(DpsEntry {
                id: format!("{}-stance-{}", style, index),
                label: format!("{} (Stance {})", style, index + 1),
                style: *style,
                stance_index: index,
                stance_name: stance.map(|s| s.name.clone()),
                breakdown,
                missing: build.missing,
            });
        }
    }

    debug!(entries = entries.len(), "Compared stances");
    Ok(entries)
}

/// Entry with the highest DPS
pub fn best_entry(entries: &[DpsEntry]) -> Option<&DpsEntry> {
    entries
        .iter()
        .max_by(|a, b| a.dps().total_cmp(&b.dps()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentPiece, EquipmentStats, Loadout};
    use crate::stance::{Stance, StanceRegistry, StanceTable};
    use crate::types::{DamageType, EquipmentSlot, ItemSlot, StyleCategory};

    fn stances() -> StanceRegistry {
        let mut registry = StanceRegistry::new();
        registry.register(
            "Whip",
            StanceTable {
                styles: vec![
                    Stance::new("Flick", DamageType::Slash, Some(StyleCategory::Accurate)),
                    Stance::new("Lash", DamageType::Slash, Some(StyleCategory::Controlled)),
                    Stance::new("Deflect", DamageType::Slash, Some(StyleCategory::Defensive)),
                ],
            },
        );
        registry
    }

    fn loadouts() -> Loadouts {
        let whip = EquipmentPiece::new(
            4151,
            "Abyssal whip",
            EquipmentStats {
                slash_attack: 82,
                melee_strength: 82,
                slot: ItemSlot::Weapon,
                speed: Some(4),
                combat_style: Some("Whip".to_string()),
                ..Default::default()
            },
        );
        Loadouts {
            melee: Loadout::new().with(EquipmentSlot::Weapon, whip),
            ..Default::default()
        }
    }

    #[test]
    fn test_labels_and_order() {
        let mut selections = StanceSelections::new();
        selections.insert(CombatStyle::Melee, vec![0, 1]);
        let context = ComparisonContext {
            levels: CharacterLevels::all(99),
            ..Default::default()
        };

        let entries = compare_stances(&loadouts(), &selections, &stances(), &context).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "melee-stance-0");
        assert_eq!(entries[0].label, "melee (Stance 1)");
        assert_eq!(entries[0].stance_name.as_deref(), Some("Flick"));
        assert_eq!(entries[1].stance_name.as_deref(), Some("Lash"));
        // no target selected
        assert_eq!(entries[0].missing, vec![IncompleteInput::Target]);
    }

    #[test]
    fn test_unresolved_stance_flags_entry() {
        let mut selections = StanceSelections::new();
        selections.insert(CombatStyle::Melee, vec![7]);
        selections.insert(CombatStyle::Ranged, vec![0]);

        let entries =
            compare_stances(&loadouts(), &selections, &stances(), &ComparisonContext::default())
                .unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].stance_name.is_none());
        assert!(entries[0].missing.contains(&IncompleteInput::Stance));
        assert_eq!(entries[1].style, CombatStyle::Ranged);
        assert!(entries[1].missing.contains(&IncompleteInput::Weapon));
    }

    #[test]
    fn test_best_entry() {
        let mut selections = StanceSelections::new();
        selections.insert(CombatStyle::Melee, vec![0, 1, 2]);
        let target = MonsterVariant {
            defence_level: 200,
            slash_defence_bonus: 100,
            ..Default::default()
        };
        let context = ComparisonContext {
            target: Some(&target),
            levels: CharacterLevels::all(99),
            ..Default::default()
        };

        let entries = compare_stances(&loadouts(), &selections, &stances(), &context).unwrap();
        let best = best_entry(&entries).unwrap();
        // Deflect grants no offensive bonus, so it can't win
        assert_ne!(best.stance_name.as_deref(), Some("Deflect"));
        assert!(entries.iter().all(|e| e.dps() <= best.dps()));
        assert!(best_entry(&[]).is_none());
    }

    #[test]
    fn test_unvalidated_constants_do_not_abort() {
        let mut selections = StanceSelections::new();
        selections.insert(CombatStyle::Melee, vec![0]);
        selections.insert(CombatStyle::Ranged, vec![0]);
        let context = ComparisonContext {
            constants: CombatConstants {
                default_attack_speed: 0,
                min_attack_speed: 0,
                ..CombatConstants::default()
            },
            ..Default::default()
        };

        let entries = compare_stances(&loadouts(), &selections, &stances(), &context).unwrap();
        assert_eq!(entries.len(), 2);
        // the unarmed ranged loadout falls back to the 0-tick default
        assert_eq!(entries[1].breakdown.attack_speed, 1);
        assert!(entries.iter().all(|e| e.dps().is_finite()));
    }
}
