//! Outcome resolution for crafting checks.
//!
//! A craft starts from per-category influence sums. The dominant category
//! decides what kind of item comes out; the check margin decides how many
//! and whether the influence gets knocked down first:
//!
//! | margin      | effect                                          |
//! |-------------|-------------------------------------------------|
//! | `>= 10`     | two items, sums untouched                       |
//! | `0..10`     | one item, sums untouched                        |
//! | `-9..0`     | one item, dominant sum reduced by 1d4           |
//! | `<= -10`    | one item, dominant sum reduced by 2d4           |
//!
//! The rarity tier is read off the total influence after any reduction.

use al_core::{Category, IpSums, Rarity};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, Die};

/// Margin at which a craft yields a second item.
pub const EXCEPTIONAL_MARGIN: i64 = 10;

/// Margin at or below which the reduction doubles to 2d4.
pub const SEVERE_FAILURE_MARGIN: i64 = -10;

/// The resolved result of a craft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Category of the crafted item.
    pub category: Category,
    /// Category selected before any reduction. `original_sum` and
    /// `final_sum` are this category's influence.
    pub selected: Category,
    /// Influence of the selected category before any reduction.
    pub original_sum: u32,
    /// Influence of the selected category after any reduction.
    pub final_sum: u32,
    /// Rarity tier of the crafted item.
    pub rarity: Rarity,
    /// Number of items produced.
    pub quantity: u32,
    /// Check total minus difficulty class.
    pub margin: i64,
    /// Influence removed on a failed check, if any.
    pub reduction: Option<u32>,
    /// Per-category sums after any reduction.
    pub adjusted: IpSums,
}

impl Outcome {
    /// Difficulty class of the resulting tier.
    pub fn dc(&self) -> i32 {
        self.rarity.dc()
    }

    /// Material cost of the whole batch in gold pieces.
    pub fn cost(&self) -> u64 {
        self.rarity
            .base_cost()
            .saturating_mul(u64::from(self.quantity))
    }

    /// Returns true if the check met or beat the difficulty class.
    pub fn is_success(&self) -> bool {
        self.margin >= 0
    }
}

/// The reduction dice for a given margin, or `None` when the check passed.
pub fn reduction_pool(margin: i64) -> Option<DicePool> {
    if margin >= 0 {
        None
    } else if margin > SEVERE_FAILURE_MARGIN {
        Some(DicePool::new().add(Die::D4, 1))
    } else {
        Some(DicePool::new().add(Die::D4, 2))
    }
}

/// Resolve a craft from its influence sums and check result.
///
/// A failed check rolls its reduction dice on `rng`; nothing else is
/// random.
pub fn resolve_outcome<R: Rng + ?Sized>(
    sums: IpSums,
    check_total: i32,
    dc: i32,
    preferred: Option<Category>,
    rng: &mut R,
) -> Outcome {
    let margin = i64::from(check_total) - i64::from(dc);
    let reduction_roll = match reduction_pool(margin) {
        Some(pool) => {
            let roll = pool.roll(rng);
            tracing::debug!(%pool, %roll, margin, "failed check, rolling reduction");
            roll.total()
        }
        None => 0,
    };
    apply_margin(sums, margin, preferred, reduction_roll)
}

/// The deterministic half of [`resolve_outcome`].
///
/// `reduction_roll` is the total of the reduction dice and is ignored
/// unless `margin` is negative.
pub fn apply_margin(
    sums: IpSums,
    margin: i64,
    preferred: Option<Category>,
    reduction_roll: u32,
) -> Outcome {
    let selected = sums.dominant(preferred);
    let original_sum = sums.get(selected);

    let (category, final_sum, reduction, adjusted, quantity) = if margin >= EXCEPTIONAL_MARGIN {
        (selected, original_sum, None, sums, 2)
    } else if margin >= 0 {
        (selected, original_sum, None, sums, 1)
    } else {
        let reduction = reduction_roll.max(1);
        let final_sum = original_sum.saturating_sub(reduction).max(1);
        let adjusted = sums.with(selected, final_sum);
        // An explicit preference survives the recompute even when it is no
        // longer the largest sum.
        let category = adjusted.dominant(preferred);
        (category, final_sum, Some(reduction), adjusted, 1)
    };

    let rarity = Rarity::from_sum(adjusted.total());
    tracing::debug!(
        %category,
        %selected,
        original_sum,
        final_sum,
        %rarity,
        quantity,
        margin,
        "craft resolved"
    );

    Outcome {
        category,
        selected,
        original_sum,
        final_sum,
        rarity,
        quantity,
        margin,
        reduction,
        adjusted,
    }
}
