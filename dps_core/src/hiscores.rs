//! Hiscores - Parsing the lite hiscores CSV into levels
//!
//! The hiscores endpoint returns one `rank,level,experience` line per skill,
//! in a fixed order, followed by `rank,score` lines for activities. Fetching
//! the text is left to the caller.

use crate::levels::CharacterLevels;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, trace};

/// Skills in the order the hiscores list them
pub const SKILL_ORDER: [&str; 24] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Hitpoints",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecraft",
    "Hunter",
    "Construction",
];

/// Hiscores parsing error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HiscoresError {
    #[error("Malformed hiscores line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// One ranked skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiscoreEntry {
    pub rank: u64,
    pub level: u32,
    pub experience: Option<u64>,
}

/// Ranked skills of one player, by skill name
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hiscores {
    pub entries: BTreeMap<String, HiscoreEntry>,
}

impl Hiscores {
    /// Parse the lite CSV format.
    ///
    /// Unranked skills (`-1` rank or level) are left out. Activity lines after
    /// the skills are ignored.
    pub fn parse(csv: &str) -> Result<Self, HiscoresError> {
        let mut entries = BTreeMap::new();

        for (index, line) in csv.trim().lines().enumerate() {
            let Some(skill) = SKILL_ORDER.get(index) else {
                break;
            };

            let malformed = || HiscoresError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            };
            let fields = line
                .trim()
                .split(',')
                .map(|field| field.trim().parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| malformed())?;

            let (rank, level) = match fields.as_slice() {
                [rank, level, ..] => (*rank, *level),
                _ => return Err(malformed()),
            };
            if rank <= 0 || level <= 0 {
                trace!(skill, "Skill unranked");
                continue;
            }

            let experience = fields.get(2).copied().filter(|xp| *xp > 0).map(|xp| xp as u64);
            entries.insert(
                skill.to_string(),
                HiscoreEntry {
                    rank: rank as u64,
                    level: level.min(u32::MAX as i64) as u32,
                    experience,
                },
            );
        }

        debug!(ranked = entries.len(), "Parsed hiscores");
        Ok(Hiscores { entries })
    }

    pub fn get(&self, skill: &str) -> Option<&HiscoreEntry> {
        self.entries.get(skill)
    }

    /// Level of a skill, if ranked
    pub fn level(&self, skill: &str) -> Option<u32> {
        self.get(skill).map(|entry| entry.level)
    }
}

impl CharacterLevels {
    /// Combat levels from hiscores; unranked skills keep the fresh-account level
    pub fn from_hiscores(hiscores: &Hiscores) -> Self {
        let defaults = CharacterLevels::default();
        let level = |skill: &str, fallback: u32| hiscores.level(skill).unwrap_or(fallback);
        CharacterLevels {
            attack: level("Attack", defaults.attack),
            strength: level("Strength", defaults.strength),
            defence: level("Defence", defaults.defence),
            hitpoints: level("Hitpoints", defaults.hitpoints),
            ranged: level("Ranged", defaults.ranged),
            prayer: level("Prayer", defaults.prayer),
            magic: level("Magic", defaults.magic),
        }
    }

    /// Parse hiscores CSV straight into combat levels
    pub fn from_hiscores_csv(csv: &str) -> Result<Self, HiscoresError> {
        Ok(Self::from_hiscores(&Hiscores::parse(csv)?))
    }
}
