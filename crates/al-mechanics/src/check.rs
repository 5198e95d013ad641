//! Crafting skill checks: 1d20 plus a flat modifier.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, Die};

/// A skill check to be rolled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheck {
    /// Flat bonus added to the d20 (tool proficiency, ability modifier).
    pub modifier: i32,
}

/// A rolled skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRoll {
    /// The face the d20 landed on.
    pub natural: u32,
    /// The modifier that was applied.
    pub modifier: i32,
    /// Natural roll plus modifier.
    pub total: i32,
}

impl SkillCheck {
    /// A check with the given modifier.
    pub fn new(modifier: i32) -> Self {
        Self { modifier }
    }

    /// Roll the check.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> CheckRoll {
        let natural = DicePool::new().add(Die::D20, 1).roll(rng).total();
        // A d20 face always fits in i32.
        let total = (natural as i32).saturating_add(self.modifier);
        tracing::trace!(natural, modifier = self.modifier, total, "skill check rolled");
        CheckRoll {
            natural,
            modifier: self.modifier,
            total,
        }
    }
}

impl std::fmt::Display for CheckRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d20 ({}) {:+} = {}", self.natural, self.modifier, self.total)
    }
}
