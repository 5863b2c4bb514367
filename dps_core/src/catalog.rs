//! Catalog lookups - Read-only access to item, stance and monster data
//!
//! The engine never loads or edits catalogs itself. Anything that can answer
//! these lookups (an in-memory registry, a cache in front of a remote store)
//! can feed the builder.

use crate::equipment::EquipmentPiece;
use crate::stance::Stance;
use crate::target::MonsterVariant;

/// Lookup of equipment by item id
pub trait ItemLookup {
    /// Get an item by id, `None` when unknown
    fn item(&self, id: i32) -> Option<&EquipmentPiece>;
}

/// Lookup of stance lists by weapon combat-style family (e.g. `"Slash_sword"`)
pub trait StanceLookup {
    /// Get the ordered stances of a weapon family
    fn stances(&self, family: &str) -> Option<&[Stance]>;
}

/// Lookup of monster variants
pub trait MonsterLookup {
    /// Get a named variant of a monster
    fn variant(&self, monster: &str, variant: &str) -> Option<&MonsterVariant>;
}
