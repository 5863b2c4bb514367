//! Targets - Monster variants and their defensive stats
//!
//! Field names follow the wiki infoboxes (`Defence_level`,
//! `Stab_defence_bonus`, ...). Scraped values arrive as numbers or as text,
//! so numeric fields are read leniently and unreadable values count as 0.

use crate::catalog::MonsterLookup;
use crate::types::{DamageType, Element};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Variant name used by monsters with a single form
pub const NO_VARIANT: &str = "No variant";

/// Defensive stats of one monster form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonsterVariant {
    #[serde(rename = "Defence_level", default, deserialize_with = "lenient_u32")]
    pub defence_level: u32,
    #[serde(rename = "Stab_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub stab_defence_bonus: i32,
    #[serde(rename = "Slash_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub slash_defence_bonus: i32,
    #[serde(rename = "Crush_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub crush_defence_bonus: i32,
    #[serde(rename = "Magic_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub magic_defence_bonus: i32,
    #[serde(rename = "Light_range_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub light_range_defence_bonus: i32,
    #[serde(rename = "Standard_range_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub standard_range_defence_bonus: i32,
    /// Combined ranged defence; infoboxes list it next to the standard column
    #[serde(
        rename = "Range_defence_bonus",
        default,
        deserialize_with = "lenient_opt_i32",
        skip_serializing_if = "Option::is_none"
    )]
    pub range_defence_bonus: Option<i32>,
    #[serde(rename = "Heavy_range_defence_bonus", default, deserialize_with = "lenient_i32")]
    pub heavy_range_defence_bonus: i32,
    #[serde(rename = "Elemental_weakness", default, deserialize_with = "lenient_element")]
    pub elemental_weakness: Option<Element>,
    #[serde(rename = "Elemental_weakness_percent", default, deserialize_with = "lenient_i32")]
    pub elemental_weakness_percent: i32,
    #[serde(rename = "Hitpoints", default, deserialize_with = "lenient_u32")]
    pub hitpoints: u32,
    #[serde(rename = "Magic_level", default, deserialize_with = "lenient_u32")]
    pub magic_level: u32,
    #[serde(rename = "Size", default, deserialize_with = "lenient_u32")]
    pub size: u32,
    #[serde(rename = "Monster_attribute", default)]
    pub attribute: Option<String>,
}

impl MonsterVariant {
    /// Defence bonus the target uses against a damage type
    pub fn defence_bonus(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Stab => self.stab_defence_bonus,
            DamageType::Slash => self.slash_defence_bonus,
            DamageType::Crush => self.crush_defence_bonus,
            DamageType::Light => self.light_range_defence_bonus,
            DamageType::Standard | DamageType::Ranged => self
                .range_defence_bonus
                .unwrap_or(self.standard_range_defence_bonus),
            DamageType::Heavy => self.heavy_range_defence_bonus,
            DamageType::Magic => self.magic_defence_bonus,
            DamageType::None => 0,
        }
    }

    /// Short description such as "demon, 3x3"
    pub fn subtitle(&self) -> String {
        let mut parts = Vec::new();
        if let Some(attribute) = &self.attribute {
            if !attribute.is_empty() {
                parts.push(attribute.clone());
            }
        }
        if self.size > 0 {
            parts.push(format!("{}x{}", self.size, self.size));
        }
        parts.join(", ")
    }
}

/// A monster with one or more variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub variants: BTreeMap<String, MonsterVariant>,
}

impl Monster {
    /// The variant to use when none is selected: `"No variant"`, or the only one
    pub fn default_variant(&self) -> Option<&MonsterVariant> {
        if let Some(variant) = self.variants.get(NO_VARIANT) {
            return Some(variant);
        }
        if self.variants.len() == 1 {
            return self.variants.values().next();
        }
        None
    }

    /// Whether the variant picker is meaningful for this monster
    pub fn has_variants(&self) -> bool {
        self.variants.len() > 1
    }
}

/// Monsters keyed by name
#[derive(Debug, Clone, Default)]
pub struct Bestiary {
    monsters: HashMap<String, Monster>,
}

impl Bestiary {
    pub fn new() -> Self {
        Bestiary {
            monsters: HashMap::new(),
        }
    }

    pub fn register(&mut self, monster: Monster) {
        self.monsters.insert(monster.name.clone(), monster);
    }

    pub fn monster(&self, name: &str) -> Option<&Monster> {
        self.monsters.get(name)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

impl MonsterLookup for Bestiary {
    fn variant(&self, monster: &str, variant: &str) -> Option<&MonsterVariant> {
        self.monsters.get(monster)?.variants.get(variant)
    }
}

impl FromIterator<Monster> for Bestiary {
    fn from_iter<I: IntoIterator<Item = Monster>>(iter: I) -> Self {
        let mut bestiary = Bestiary::new();
        for monster in iter {
            bestiary.register(monster);
        }
        bestiary
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

fn parse_raw(value: Option<RawValue>) -> Option<i64> {
    match value? {
        RawValue::Int(n) => Some(n),
        RawValue::Float(f) => Some(f as i64),
        RawValue::Text(text) => {
            let cleaned = text.trim().trim_start_matches('+').trim_end_matches('%');
            cleaned
                .parse::<i64>()
                .ok()
                .or_else(|| cleaned.parse::<f64>().ok().map(|f| f as i64))
        }
    }
}

fn clamp_i32(n: i64) -> i32 {
    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(parse_raw(value).map_or(0, clamp_i32))
}

/// Like `lenient_i32`, but keeps "absent or unreadable" distinct from 0
fn lenient_opt_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(parse_raw(value).map(clamp_i32))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(parse_raw(value).map_or(0, |n| n.clamp(0, u32::MAX as i64) as u32))
}

/// Element names only; numbers and anything else read as no weakness
fn lenient_element<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Element>, D::Error> {
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(RawValue::Text(text)) => match text.trim() {
            "Air" => Some(Element::Air),
            "Water" => Some(Element::Water),
            "Earth" => Some(Element::Earth),
            "Fire" => Some(Element::Fire),
            _ => None,
        },
        _ => None,
    })
}
