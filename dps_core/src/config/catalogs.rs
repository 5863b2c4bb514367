//! Catalog loading - Items, stance tables and monsters from JSON

use super::ConfigError;
use crate::equipment::{EquipmentPiece, ItemRegistry};
use crate::stance::{StanceRegistry, StanceTable};
use crate::target::{Bestiary, Monster};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Load an item catalog (a JSON array of items) from a file
pub fn load_item_registry(path: &Path) -> Result<ItemRegistry, ConfigError> {
    let items: Vec<EquipmentPiece> = super::load_json(path)?;
    Ok(build_item_registry(items))
}

/// Load an item catalog from a JSON string
pub fn parse_item_registry(content: &str) -> Result<ItemRegistry, ConfigError> {
    let items: Vec<EquipmentPiece> = super::parse_json(content)?;
    Ok(build_item_registry(items))
}

fn build_item_registry(items: Vec<EquipmentPiece>) -> ItemRegistry {
    let registry: ItemRegistry = items.into_iter().collect();
    debug!(items = registry.len(), "Loaded item catalog");
    registry
}

/// Load stance tables (family -> `{ "styles": [...] }`) from a file
pub fn load_stance_registry(path: &Path) -> Result<StanceRegistry, ConfigError> {
    let tables: HashMap<String, StanceTable> = super::load_json(path)?;
    Ok(build_stance_registry(tables))
}

/// Load stance tables from a JSON string
pub fn parse_stance_registry(content: &str) -> Result<StanceRegistry, ConfigError> {
    let tables: HashMap<String, StanceTable> = super::parse_json(content)?;
    Ok(build_stance_registry(tables))
}

fn build_stance_registry(tables: HashMap<String, StanceTable>) -> StanceRegistry {
    let registry = StanceRegistry::from(tables);
    debug!(families = registry.len(), "Loaded stance tables");
    registry
}

/// Get the bundled stance tables
pub fn default_stances() -> StanceRegistry {
    let json = include_str!("../../config/combat_styles.json");
    parse_stance_registry(json).unwrap_or_else(|err| {
        warn!(error = %err, "Bundled stance tables failed to parse");
        StanceRegistry::new()
    })
}

/// Load monsters (a JSON array) from a file
pub fn load_bestiary(path: &Path) -> Result<Bestiary, ConfigError> {
    let monsters: Vec<Monster> = super::load_json(path)?;
    Ok(build_bestiary(monsters))
}

/// Load monsters from a JSON string
pub fn parse_bestiary(content: &str) -> Result<Bestiary, ConfigError> {
    let monsters: Vec<Monster> = super::parse_json(content)?;
    Ok(build_bestiary(monsters))
}

fn build_bestiary(monsters: Vec<Monster>) -> Bestiary {
    let bestiary: Bestiary = monsters.into_iter().collect();
    debug!(monsters = bestiary.len(), "Loaded bestiary");
    bestiary
}
