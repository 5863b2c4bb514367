//! Equipment - Items, loadouts and bonus totals

mod bonuses;
mod loadout;
mod registry;

pub use bonuses::EquipmentBonuses;
pub use loadout::{Loadout, LoadoutSnapshot, Loadouts};
pub use registry::ItemRegistry;

use crate::types::ItemSlot;
use serde::{Deserialize, Serialize};

/// Id used for "nothing equipped"
pub const EMPTY_ITEM_ID: i32 = -1;

/// Combat stats of an item, using the wiki infobox field names
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentStats {
    pub stab_attack: i32,
    pub slash_attack: i32,
    pub crush_attack: i32,
    pub magic_attack: i32,
    pub ranged_attack: i32,

    pub stab_defence: i32,
    pub slash_defence: i32,
    pub crush_defence: i32,
    pub magic_defence: i32,
    pub ranged_defence: i32,

    pub melee_strength: i32,
    pub ranged_strength: i32,
    /// Magic damage percentage, may be fractional
    pub magic_damage: f64,
    pub prayer: i32,
    pub slot: ItemSlot,

    /// Attack interval in ticks, weapons only
    pub speed: Option<u32>,
    #[serde(rename = "attackrange")]
    pub attack_range: Option<u32>,
    /// Key into the stance tables
    #[serde(rename = "combatstyle")]
    pub combat_style: Option<String>,
}

/// A catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentPiece {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub stats: EquipmentStats,
}

impl EquipmentPiece {
    pub fn new(id: i32, name: impl Into<String>, stats: EquipmentStats) -> Self {
        EquipmentPiece {
            id,
            name: name.into(),
            image_url: String::new(),
            stats,
        }
    }

    /// The "nothing equipped" placeholder
    pub fn empty() -> Self {
        EquipmentPiece {
            id: EMPTY_ITEM_ID,
            name: String::new(),
            image_url: String::new(),
            stats: EquipmentStats::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id == EMPTY_ITEM_ID
    }

    pub fn is_two_handed(&self) -> bool {
        self.stats.slot == ItemSlot::TwoHanded
    }
}

impl Default for EquipmentPiece {
    fn default() -> Self {
        Self::empty()
    }
}
