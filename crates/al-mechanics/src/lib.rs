//! Crafting mechanics engine for Alembic.
//!
//! Provides dice rolling, skill checks, the outcome resolver that turns
//! influence sums and a check margin into a crafted result, the weighted
//! table roller behind harvesting, and the brewing workflow that ties
//! reagents to both. Every random step takes its RNG as an argument.

pub mod brew;
pub mod check;
pub mod config;
pub mod dice;
pub mod error;
pub mod harvest;
pub mod outcome;

pub use brew::{Brew, CheckSource, MAX_REAGENTS, brew, find_reagents};
pub use check::{CheckRoll, SkillCheck};
pub use config::CraftConfig;
pub use dice::{DicePool, Die, RollResult};
pub use error::{MechError, MechResult};
pub use harvest::{HarvestRun, check_drop_rate, harvest, harvest_tally, roll_from_table};
pub use outcome::{Outcome, apply_margin, reduction_pool, resolve_outcome};
