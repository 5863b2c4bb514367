//! Stances - Selectable combat styles of each weapon family

use crate::catalog::StanceLookup;
use crate::equipment::Loadout;
use crate::types::{DamageType, StyleBonuses, StyleCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One selectable stance, e.g. "Lash (Slash - Controlled)"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stance {
    #[serde(rename = "stance")]
    pub name: String,
    #[serde(rename = "attack_type")]
    pub damage_type: DamageType,
    /// `None` for stances without a style category (e.g. spellcasting)
    #[serde(default)]
    pub style: Option<StyleCategory>,
    /// Skills that receive experience
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub boost: Option<String>,
}

impl Stance {
    pub fn new(name: impl Into<String>, damage_type: DamageType, style: Option<StyleCategory>) -> Self {
        Stance {
            name: name.into(),
            damage_type,
            style,
            experience: Vec::new(),
            boost: None,
        }
    }

    pub fn style_bonuses(&self) -> StyleBonuses {
        StyleCategory::bonuses(self.style)
    }

    /// Label in the form "Name (Type - Style)"
    pub fn label(&self) -> String {
        let style = match self.style {
            Some(style) => format!("{:?}", style),
            None => "None".to_string(),
        };
        format!("{} ({:?} - {})", self.name, self.damage_type, style)
    }
}

/// Stances of one weapon family
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StanceTable {
    pub styles: Vec<Stance>,
}

/// Stance tables keyed by weapon family
#[derive(Debug, Clone, Default)]
pub struct StanceRegistry {
    tables: HashMap<String, StanceTable>,
}

impl StanceRegistry {
    pub fn new() -> Self {
        StanceRegistry {
            tables: HashMap::new(),
        }
    }

    /// Register a weapon family's stances
    pub fn register(&mut self, family: impl Into<String>, table: StanceTable) {
        self.tables.insert(family.into(), table);
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl StanceLookup for StanceRegistry {
    fn stances(&self, family: &str) -> Option<&[Stance]> {
        self.tables.get(family).map(|table| table.styles.as_slice())
    }
}

impl From<HashMap<String, StanceTable>> for StanceRegistry {
    fn from(tables: HashMap<String, StanceTable>) -> Self {
        StanceRegistry { tables }
    }
}

/// Stances available to the loadout's weapon
pub fn available_stances<'a>(loadout: &Loadout, stances: &'a impl StanceLookup) -> &'a [Stance] {
    loadout
        .weapon()
        .and_then(|weapon| weapon.stats.combat_style.as_deref())
        .and_then(|family| stances.stances(family))
        .unwrap_or(&[])
}

/// Resolve the stance at `index` for the loadout's weapon.
///
/// `None` when no weapon is equipped, its family has no table, or the index
/// is out of range.
pub fn resolve_stance<'a>(
    loadout: &Loadout,
    stances: &'a impl StanceLookup,
    index: usize,
) -> Option<&'a Stance> {
    available_stances(loadout, stances).get(index)
}
