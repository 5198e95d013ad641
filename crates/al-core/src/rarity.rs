use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity tier of a crafted item, ordered from least to most rare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Up to 12 influence.
    Common,
    /// 13 to 21 influence.
    Uncommon,
    /// 22 to 27 influence.
    Rare,
    /// 28 to 30 influence.
    VeryRare,
    /// 31 influence or more.
    Legendary,
}

impl Rarity {
    /// Every tier from lowest to highest.
    pub const ALL: [Rarity; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::VeryRare,
        Self::Legendary,
    ];

    /// Map an influence total to its tier. Zero counts as common.
    pub fn from_sum(sum: u32) -> Self {
        match sum {
            0..=12 => Self::Common,
            13..=21 => Self::Uncommon,
            22..=27 => Self::Rare,
            28..=30 => Self::VeryRare,
            _ => Self::Legendary,
        }
    }

    /// The inclusive influence band for this tier. Legendary is open-ended.
    pub fn band(self) -> (u32, Option<u32>) {
        match self {
            Self::Common => (1, Some(12)),
            Self::Uncommon => (13, Some(21)),
            Self::Rare => (22, Some(27)),
            Self::VeryRare => (28, Some(30)),
            Self::Legendary => (31, None),
        }
    }

    /// Difficulty class of the crafting check.
    pub fn dc(self) -> i32 {
        match self {
            Self::Common => 10,
            Self::Uncommon => 15,
            Self::Rare => 20,
            Self::VeryRare => 25,
            Self::Legendary => 30,
        }
    }

    /// Base material cost in gold pieces for one item.
    pub fn base_cost(self) -> u64 {
        match self {
            Self::Common => 50,
            Self::Uncommon => 200,
            Self::Rare => 2_000,
            Self::VeryRare => 20_000,
            Self::Legendary => 100_000,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "Common"),
            Self::Uncommon => write!(f, "Uncommon"),
            Self::Rare => write!(f, "Rare"),
            Self::VeryRare => write!(f, "Very Rare"),
            Self::Legendary => write!(f, "Legendary"),
        }
    }
}
