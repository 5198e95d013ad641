use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// The three influence categories a crafted item can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Offensive and defensive effects.
    #[default]
    Combat,
    /// Exploration, travel, and support effects.
    Utility,
    /// Chaotic and transformative effects.
    Entropy,
}

impl Category {
    /// Every category in tie-break order.
    pub const ALL: [Category; 3] = [Self::Combat, Self::Utility, Self::Entropy];

    /// Parse a category name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not a known category.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "combat" => Some(Self::Combat),
            "utility" => Some(Self::Utility),
            "entropy" => Some(Self::Entropy),
            _ => None,
        }
    }

    /// The consumable form an alchemical brew of this category takes.
    pub fn brew_form(self) -> &'static str {
        match self {
            Self::Combat => "Draught",
            Self::Utility => "Tonic",
            Self::Entropy => "Philter",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combat => write!(f, "combat"),
            Self::Utility => write!(f, "utility"),
            Self::Entropy => write!(f, "entropy"),
        }
    }
}

/// Influence point totals for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IpSums {
    /// Combat influence.
    pub combat: u32,
    /// Utility influence.
    pub utility: u32,
    /// Entropy influence.
    pub entropy: u32,
}

impl IpSums {
    /// Create a set of sums from explicit values.
    pub fn new(combat: u32, utility: u32, entropy: u32) -> Self {
        Self {
            combat,
            utility,
            entropy,
        }
    }

    /// The sum for a single category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Combat => self.combat,
            Category::Utility => self.utility,
            Category::Entropy => self.entropy,
        }
    }

    /// A copy with one category replaced.
    pub fn with(mut self, category: Category, value: u32) -> Self {
        match category {
            Category::Combat => self.combat = value,
            Category::Utility => self.utility = value,
            Category::Entropy => self.entropy = value,
        }
        self
    }

    /// Total influence across all three categories.
    pub fn total(&self) -> u32 {
        self.combat
            .saturating_add(self.utility)
            .saturating_add(self.entropy)
    }

    /// Returns true if every category is zero.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The category that drives the craft.
    ///
    /// An explicit preference always wins. Otherwise the category with the
    /// largest sum is chosen, ties going to the earliest in
    /// [`Category::ALL`]. All-zero sums resolve to the default category.
    pub fn dominant(&self, preferred: Option<Category>) -> Category {
        if let Some(category) = preferred {
            return category;
        }
        let mut best = Category::default();
        let mut best_sum = self.get(best);
        for category in Category::ALL {
            let sum = self.get(category);
            if sum > best_sum {
                best = category;
                best_sum = sum;
            }
        }
        best
    }
}

impl Add for IpSums {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            combat: self.combat.saturating_add(rhs.combat),
            utility: self.utility.saturating_add(rhs.utility),
            entropy: self.entropy.saturating_add(rhs.entropy),
        }
    }
}

impl Sum for IpSums {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl fmt::Display for IpSums {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "combat {} / utility {} / entropy {}",
            self.combat, self.utility, self.entropy
        )
    }
}
