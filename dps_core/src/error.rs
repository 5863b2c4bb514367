//! Error types for the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A piece of state the loadout builder had to default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteInput {
    /// No weapon in the weapon slot; attack speed fell back to the default
    Weapon,
    /// No stance resolved for the weapon; no style or attack bonus applied
    Stance,
    /// No monster variant selected; the training dummy defence was used
    Target,
}

impl fmt::Display for IncompleteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncompleteInput::Weapon => f.write_str("weapon"),
            IncompleteInput::Stance => f.write_str("stance"),
            IncompleteInput::Target => f.write_str("target"),
        }
    }
}

fn join_missing(missing: &[IncompleteInput]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Combat calculation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DpsError {
    #[error("Attack speed must be at least one tick, got {0}")]
    InvalidAttackSpeed(u32),
    #[error("Missing parameters: {}", join_missing(.0))]
    IncompleteInput(Vec<IncompleteInput>),
}
