//! Prelude module for convenient imports
//!
//! ```rust
//! use dps_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CombatStyle, DamageType, EquipmentSlot, ItemSlot, StyleCategory};
pub use crate::levels::CharacterLevels;

// Combat math
pub use crate::combat::{
    calculate_attack_roll, calculate_defence_roll, calculate_dps, calculate_dps_breakdown,
    calculate_hit_chance, calculate_max_hit, AccuracyInput, DpsBreakdown, DpsInput, MaxHitInput,
};

// Assembly
pub use crate::builder::{build_dps_input, DpsBuild, LoadoutParameterBuilder, Prayer};
pub use crate::equipment::{EquipmentPiece, EquipmentStats, Loadout, Loadouts};
pub use crate::stance::{resolve_stance, Stance};
pub use crate::target::MonsterVariant;
pub use crate::report::{compare_stances, ComparisonContext, DpsEntry, StanceSelections};

// Catalogs
pub use crate::config::default_stances;
pub use crate::catalog::{ItemLookup, MonsterLookup, StanceLookup};

// Errors
pub use crate::error::{DpsError, IncompleteInput};
