//! dps_core - Combat math engine for an OSRS-style DPS calculator
//!
//! This library provides:
//! - Accuracy: attack roll, defence roll and hit chance
//! - Max hit: effective strength and max hit
//! - DPS: expected damage per second from the two models and attack speed
//! - LoadoutParameterBuilder: loadout + stance + target into a DpsInput
//! - Catalog parsing: items, stance tables, monsters and hiscores

pub mod builder;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod equipment;
pub mod error;
pub mod hiscores;
pub mod levels;
pub mod prelude;
pub mod report;
pub mod stance;
pub mod target;
pub mod types;

// Re-export core types for convenience
pub use builder::{build_dps_input, DpsBuild, LoadoutParameterBuilder, Prayer};
pub use catalog::{ItemLookup, MonsterLookup, StanceLookup};
pub use combat::{
    calculate_attack_roll, calculate_defence_roll, calculate_dps, calculate_dps_breakdown,
    calculate_effective_strength_level, calculate_hit_chance, calculate_max_hit, AccuracyInput,
    DpsBreakdown, DpsInput, MaxHitInput,
};
pub use config::{default_stances, CombatConstants, ConfigError};
pub use equipment::{EquipmentBonuses, EquipmentPiece, EquipmentStats, ItemRegistry, Loadout, Loadouts};
pub use error::{DpsError, IncompleteInput};
pub use hiscores::{Hiscores, HiscoresError};
pub use levels::CharacterLevels;
pub use report::{compare_stances, ComparisonContext, DpsEntry, StanceSelections};
pub use stance::{resolve_stance, Stance, StanceRegistry, StanceTable};
pub use target::{Bestiary, Monster, MonsterVariant};
pub use types::{CombatStyle, DamageType, EquipmentSlot, ItemSlot, StyleCategory};
