//! Combat math - Accuracy, Max hit, DPS
//!
//! Three pure models. Each takes a plain value struct and returns a number;
//! none of them look at equipment, stances or monsters directly. Those are
//! flattened into the inputs by [`crate::builder`].

mod accuracy;
mod dps;
mod max_hit;
mod result;

pub use accuracy::{
    calculate_attack_roll, calculate_defence_roll, calculate_effective_attack_level,
    calculate_hit_chance, AccuracyInput,
};
pub use dps::{calculate_dps, calculate_dps_breakdown, calculate_dps_with, DpsInput};
pub use max_hit::{calculate_effective_strength_level, calculate_max_hit, MaxHitInput};
pub use result::DpsBreakdown;

/// Combat formula constants
pub mod constants {
    /// Real-world seconds in one game tick
    pub const TICK_SECONDS: f64 = 0.6;

    /// Flat bonus added to every effective level
    pub const EFFECTIVE_LEVEL_BONUS: f64 = 8.0;

    /// Offset added to equipment and defence bonuses in roll formulas
    pub const ROLL_BONUS_OFFSET: i64 = 64;

    /// Offset added to the target's defence level in the defence roll
    pub const DEFENCE_LEVEL_OFFSET: i64 = 9;

    /// Divisor of the max hit formula
    pub const MAX_HIT_DIVISOR: f64 = 640.0;
}
