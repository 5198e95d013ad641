//! Dice pool construction and rolling.

use rand::Rng;

use super::Die;
use super::roll::{DieResult, RollResult};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|&die| DieResult {
                die,
                value: rng.random_range(1..=die.sides()),
            })
            .collect();
        RollResult { dice }
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Group runs of the same die: [d4, d4] -> "2d4".
        let mut parts: Vec<String> = Vec::new();
        let mut iter = self.dice.iter().peekable();
        while let Some(&die) = iter.next() {
            let mut n = 1;
            while iter.peek() == Some(&&die) {
                iter.next();
                n += 1;
            }
            parts.push(format!("{n}{die}"));
        }
        write!(f, "{}", parts.join(" + "))
    }
}
