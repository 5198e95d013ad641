//! Dice types, pools, and rolling.
//!
//! Crafting rolls two kinds of die: the d20 for skill checks and the d4
//! for failure reductions.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::RollResult;

use serde::{Deserialize, Serialize};

/// A die type used by the crafting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die, rolled to reduce influence on a failed check.
    D4,
    /// Twenty-sided die, rolled for skill checks.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D20 => 20,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
