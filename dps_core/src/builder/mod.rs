//! Loadout parameter assembly
//!
//! Turns a loadout, a stance, a target and the attacker's levels into a
//! [`DpsInput`]. Missing pieces never fail the build: the documented
//! fallbacks are used and each gap is recorded as an [`IncompleteInput`] so
//! the caller can decide whether the number is worth showing.

mod parameters;
mod prayer;

pub use parameters::LoadoutParameterBuilder;
pub use prayer::Prayer;

use crate::combat::{calculate_dps, DpsInput};
use crate::equipment::Loadout;
use crate::error::{DpsError, IncompleteInput};
use crate::levels::CharacterLevels;
use crate::stance::Stance;
use crate::target::MonsterVariant;
use crate::types::CombatStyle;

/// A built input plus whatever had to be defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct DpsBuild {
    pub input: DpsInput,
    pub missing: Vec<IncompleteInput>,
}

impl DpsBuild {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// The input, or `IncompleteInput` listing what was defaulted
    pub fn require_complete(self) -> Result<DpsInput, DpsError> {
        if self.missing.is_empty() {
            Ok(self.input)
        } else {
            Err(DpsError::IncompleteInput(self.missing))
        }
    }

    /// DPS of the built input, complete or not
    pub fn dps(&self) -> Result<f64, DpsError> {
        calculate_dps(&self.input)
    }
}

/// Build a DPS input with no prayers or set effects
pub fn build_dps_input(
    loadout: &Loadout,
    stance: Option<&Stance>,
    target: Option<&MonsterVariant>,
    levels: &CharacterLevels,
    style: CombatStyle,
) -> DpsBuild {
    LoadoutParameterBuilder::new(loadout, style)
        .stance(stance)
        .target(target)
        .levels(*levels)
        .build()
}
