//! ItemRegistry - In-memory item catalog

use super::EquipmentPiece;
use crate::catalog::ItemLookup;
use std::collections::HashMap;

/// Items keyed by id
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: HashMap<i32, EquipmentPiece>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// Register an item; the empty sentinel is ignored
    pub fn register(&mut self, piece: EquipmentPiece) {
        if piece.is_empty() {
            return;
        }
        self.items.insert(piece.id, piece);
    }

    /// Find an item by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&EquipmentPiece> {
        self.items.values().find(|piece| piece.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemLookup for ItemRegistry {
    fn item(&self, id: i32) -> Option<&EquipmentPiece> {
        self.items.get(&id)
    }
}

impl FromIterator<EquipmentPiece> for ItemRegistry {
    fn from_iter<I: IntoIterator<Item = EquipmentPiece>>(iter: I) -> Self {
        let mut registry = ItemRegistry::new();
        for piece in iter {
            registry.register(piece);
        }
        registry
    }
}
