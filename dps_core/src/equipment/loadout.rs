//! Loadout - The items worn for one combat style

use super::EquipmentPiece;
use crate::catalog::ItemLookup;
use crate::types::{CombatStyle, EquipmentSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Persisted form of a loadout: slot to item id, `None` for empty slots
pub type LoadoutSnapshot = BTreeMap<EquipmentSlot, Option<i32>>;

/// Items equipped in each of the twelve slots
///
/// Empty slots are simply absent; equipping the empty sentinel clears a slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Loadout {
    slots: BTreeMap<EquipmentSlot, EquipmentPiece>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item in a slot, returning whatever was there before
    pub fn equip(&mut self, slot: EquipmentSlot, piece: EquipmentPiece) -> Option<EquipmentPiece> {
        if piece.is_empty() {
            return self.slots.remove(&slot);
        }
        self.slots.insert(slot, piece)
    }

    /// Builder-style variant of [`Loadout::equip`]
    pub fn with(mut self, slot: EquipmentSlot, piece: EquipmentPiece) -> Self {
        self.equip(slot, piece);
        self
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EquipmentPiece> {
        self.slots.remove(&slot)
    }

    /// Item in a slot, `None` when empty
    pub fn get(&self, slot: EquipmentSlot) -> Option<&EquipmentPiece> {
        self.slots.get(&slot)
    }

    pub fn weapon(&self) -> Option<&EquipmentPiece> {
        self.get(EquipmentSlot::Weapon)
    }

    /// Whether the weapon slot holds a two-handed weapon
    pub fn is_two_handed(&self) -> bool {
        self.weapon().is_some_and(EquipmentPiece::is_two_handed)
    }

    /// All equipped items, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &EquipmentPiece)> {
        self.slots.iter().map(|(slot, piece)| (*slot, piece))
    }

    /// Items whose bonuses count while attacking.
    ///
    /// Skips the special attack weapon (it is swapped in, not worn) and the
    /// shield whenever a two-handed weapon is wielded.
    pub fn contributing(&self) -> impl Iterator<Item = (EquipmentSlot, &EquipmentPiece)> {
        let two_handed = self.is_two_handed();
        self.iter().filter(move |(slot, piece)| {
            !piece.is_empty()
                && *slot != EquipmentSlot::SpecWeapon
                && !(two_handed && *slot == EquipmentSlot::Shield)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot to item id map for persistence
    pub fn to_snapshot(&self) -> LoadoutSnapshot {
        EquipmentSlot::all()
            .iter()
            .map(|slot| (*slot, self.get(*slot).map(|piece| piece.id)))
            .collect()
    }

    /// Rebuild a loadout from a snapshot.
    ///
    /// Ids the catalog does not know leave the slot empty.
    pub fn from_snapshot(snapshot: &LoadoutSnapshot, items: &impl ItemLookup) -> Self {
        let mut loadout = Loadout::new();
        for (slot, id) in snapshot {
            let Some(id) = id else { continue };
            match items.item(*id) {
                Some(piece) => {
                    loadout.equip(*slot, piece.clone());
                }
                None => debug!(slot = ?slot, item_id = id, "Unknown item in loadout snapshot"),
            }
        }
        loadout
    }
}

/// One loadout per combat style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Loadouts {
    pub melee: Loadout,
    pub ranged: Loadout,
    pub magic: Loadout,
}

impl Loadouts {
    pub fn get(&self, style: CombatStyle) -> &Loadout {
        match style {
            CombatStyle::Melee => &self.melee,
            CombatStyle::Ranged => &self.ranged,
            CombatStyle::Magic => &self.magic,
        }
    }

    pub fn get_mut(&mut self, style: CombatStyle) -> &mut Loadout {
        match style {
            CombatStyle::Melee => &mut self.melee,
            CombatStyle::Ranged => &mut self.ranged,
            CombatStyle::Magic => &mut self.magic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentStats, ItemRegistry};
    use crate::types::ItemSlot;

    fn piece(id: i32, slot: ItemSlot) -> EquipmentPiece {
        EquipmentPiece::new(
            id,
            format!("item {id}"),
            EquipmentStats {
                slot,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_equip_empty_clears_slot() {
        let mut loadout = Loadout::new().with(EquipmentSlot::Head, piece(1, ItemSlot::Head));
        assert!(loadout.get(EquipmentSlot::Head).is_some());

        loadout.equip(EquipmentSlot::Head, EquipmentPiece::empty());
        assert!(loadout.get(EquipmentSlot::Head).is_none());
        assert!(loadout.is_empty());
    }

    #[test]
    fn test_two_handed_hides_shield() {
        let loadout = Loadout::new()
            .with(EquipmentSlot::Weapon, piece(1, ItemSlot::TwoHanded))
            .with(EquipmentSlot::Shield, piece(2, ItemSlot::Shield))
            .with(EquipmentSlot::Head, piece(3, ItemSlot::Head));

        assert!(loadout.is_two_handed());
        let ids: Vec<i32> = loadout.contributing().map(|(_, p)| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_spec_weapon_never_contributes() {
        let loadout = Loadout::new()
            .with(EquipmentSlot::Weapon, piece(1, ItemSlot::Weapon))
            .with(EquipmentSlot::SpecWeapon, piece(2, ItemSlot::Weapon))
            .with(EquipmentSlot::Shield, piece(3, ItemSlot::Shield));

        let ids: Vec<i32> = loadout.contributing().map(|(_, p)| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut registry = ItemRegistry::new();
        registry.register(piece(4151, ItemSlot::Weapon));
        registry.register(piece(10828, ItemSlot::Head));

        let loadout = Loadout::new()
            .with(EquipmentSlot::Weapon, piece(4151, ItemSlot::Weapon))
            .with(EquipmentSlot::Head, piece(10828, ItemSlot::Head));

        let snapshot = loadout.to_snapshot();
        assert_eq!(snapshot.len(), EquipmentSlot::all().len());
        assert_eq!(snapshot[&EquipmentSlot::Ring], None);

        let restored = Loadout::from_snapshot(&snapshot, &registry);
        assert_eq!(restored, loadout);
    }

    #[test]
    fn test_snapshot_unknown_item_left_empty() {
        let registry = ItemRegistry::new();
        let mut snapshot = LoadoutSnapshot::new();
        snapshot.insert(EquipmentSlot::Weapon, Some(99999));

        let restored = Loadout::from_snapshot(&snapshot, &registry);
        assert!(restored.weapon().is_none());
    }
}
