//! End-to-end: catalogs -> saved loadout -> stance -> DPS

use dps_core::config::{parse_bestiary, parse_item_registry};
use dps_core::equipment::LoadoutSnapshot;
use dps_core::prelude::*;
use std::collections::BTreeMap;

const ITEMS: &str = r#"[
    {
        "id": 4151,
        "name": "Abyssal whip",
        "stats": {
            "slash_attack": 82,
            "melee_strength": 82,
            "slot": "weapon",
            "speed": 4,
            "combatstyle": "Whip"
        }
    },
    {
        "id": 861,
        "name": "Magic shortbow",
        "stats": {
            "ranged_attack": 69,
            "slot": "2h",
            "speed": 4,
            "combatstyle": "Bow"
        }
    },
    {
        "id": 8850,
        "name": "Rune defender",
        "stats": { "stab_attack": 20, "slash_attack": 19, "melee_strength": 5, "slot": "shield" }
    },
    {
        "id": 892,
        "name": "Rune arrow",
        "stats": { "ranged_strength": 49, "slot": "ammo" }
    }
]"#;

const MONSTERS: &str = r#"[
    {
        "name": "Training dummy",
        "variants": {
            "No variant": { "Defence_level": "1", "Slash_defence_bonus": 0, "Size": 1 }
        }
    },
    {
        "name": "Chicken",
        "variants": {
            "Level 1": { "Defence_level": 1 },
            "Level 3": { "Defence_level": 1, "Standard_range_defence_bonus": -42 }
        }
    }
]"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn approx(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() < tolerance
}

#[test]
fn test_whip_lash_against_dummy() {
    init_tracing();
    let items = parse_item_registry(ITEMS).unwrap();
    let bestiary = parse_bestiary(MONSTERS).unwrap();
    let stances = default_stances();

    // A saved loadout, as a UI would persist it
    let snapshot: LoadoutSnapshot = serde_json::from_str(
        r#"{ "weapon": 4151, "shield": null, "spec wep": 999999 }"#,
    )
    .unwrap();
    let loadout = Loadout::from_snapshot(&snapshot, &items);
    assert_eq!(loadout.weapon().map(|w| w.id), Some(4151));
    assert!(loadout.get(EquipmentSlot::SpecWeapon).is_none());

    let stance = resolve_stance(&loadout, &stances, 1).unwrap();
    assert_eq!(stance.name, "Lash");

    let dummy = bestiary.monster("Training dummy").unwrap();
    let target = dummy.default_variant();
    assert!(!dummy.has_variants());

    let build = build_dps_input(
        &loadout,
        Some(stance),
        target,
        &CharacterLevels::all(99),
        CombatStyle::Melee,
    );
    let input = build.require_complete().unwrap();

    assert_eq!(calculate_attack_roll(&input.accuracy), 15768);
    assert_eq!(calculate_defence_roll(&input.accuracy), 640);
    assert_eq!(calculate_max_hit(&input.max_hit), 25);
    assert!(approx(calculate_hit_chance(&input.accuracy), 0.979_643_6, 1e-6));
    assert!(approx(calculate_dps(&input).unwrap(), 5.118_01, 1e-4));
}

#[test]
fn test_two_handed_bow_ignores_shield_and_uses_ammo() {
    init_tracing();
    let items = parse_item_registry(ITEMS).unwrap();
    let bestiary = parse_bestiary(MONSTERS).unwrap();
    let stances = default_stances();

    let mut snapshot = LoadoutSnapshot::new();
    snapshot.insert(EquipmentSlot::Weapon, Some(861));
    snapshot.insert(EquipmentSlot::Shield, Some(8850));
    snapshot.insert(EquipmentSlot::Ammo, Some(892));
    let loadout = Loadout::from_snapshot(&snapshot, &items);
    assert!(loadout.is_two_handed());

    let chicken = bestiary.monster("Chicken").unwrap();
    assert!(chicken.has_variants());
    assert!(chicken.default_variant().is_none());
    let target = bestiary.variant("Chicken", "Level 3");
    assert_eq!(target.map(|t| t.standard_range_defence_bonus), Some(-42));

    let accurate = resolve_stance(&loadout, &stances, 0);
    let rapid = resolve_stance(&loadout, &stances, 1);
    let levels = CharacterLevels::all(99);

    let accurate_build =
        build_dps_input(&loadout, accurate, target, &levels, CombatStyle::Ranged);
    let rapid_build = build_dps_input(&loadout, rapid, target, &levels, CombatStyle::Ranged);
    assert!(accurate_build.is_complete());
    assert!(rapid_build.is_complete());

    assert_eq!(accurate_build.input.accuracy.equipment_attack_bonus, 69);
    assert_eq!(accurate_build.input.max_hit.equipment_strength_bonus, 49);
    assert_eq!(accurate_build.input.attack_speed, 4);
    assert_eq!(rapid_build.input.attack_speed, 3);
    assert!(rapid_build.dps().unwrap() > accurate_build.dps().unwrap());
}

#[test]
fn test_missing_pieces_reported_but_computable() {
    init_tracing();
    let stances = default_stances();
    let loadout = Loadout::new();

    assert!(resolve_stance(&loadout, &stances, 0).is_none());
    let build = build_dps_input(
        &loadout,
        None,
        None,
        &CharacterLevels::default(),
        CombatStyle::Melee,
    );

    assert!(!build.is_complete());
    let dps = build.dps().unwrap();
    assert!(dps.is_finite() && dps >= 0.0);

    match build.require_complete() {
        Err(DpsError::IncompleteInput(missing)) => {
            assert!(missing.contains(&IncompleteInput::Weapon));
            assert!(missing.contains(&IncompleteInput::Stance));
            assert!(missing.contains(&IncompleteInput::Target));
        }
        other => panic!("expected incomplete input, got {:?}", other),
    }
}

#[test]
fn test_stance_comparison_across_styles() {
    init_tracing();
    let items = parse_item_registry(ITEMS).unwrap();
    let bestiary = parse_bestiary(MONSTERS).unwrap();
    let stances = default_stances();

    let mut loadouts = Loadouts::default();
    if let Some(whip) = items.item(4151) {
        loadouts.melee.equip(EquipmentSlot::Weapon, whip.clone());
    }
    if let Some(bow) = items.item(861) {
        loadouts.ranged.equip(EquipmentSlot::Weapon, bow.clone());
    }
    if let Some(arrows) = items.item(892) {
        loadouts.ranged.equip(EquipmentSlot::Ammo, arrows.clone());
    }

    let mut selections = StanceSelections::new();
    selections.insert(CombatStyle::Melee, vec![0, 1]);
    selections.insert(CombatStyle::Ranged, vec![1]);

    let mut prayers = BTreeMap::new();
    prayers.insert(CombatStyle::Melee, Prayer::Piety);
    let context = ComparisonContext {
        target: bestiary.variant("Training dummy", "No variant"),
        levels: CharacterLevels::all(99),
        prayers,
        ..Default::default()
    };

    let entries = compare_stances(&loadouts, &selections, &stances, &context).unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["melee-stance-0", "melee-stance-1", "ranged-stance-1"]);
    assert!(entries.iter().all(DpsEntry::is_complete));
    assert_eq!(entries[2].stance_name.as_deref(), Some("Rapid"));
}
