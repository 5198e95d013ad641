//! Core types for Alembic: categories, influence points, rarity tiers,
//! reagents, and harvest tables.
//!
//! This crate is the data model the mechanics engine works on. It has no
//! notion of randomness; everything here is plain data plus the fixed
//! lookup tables the crafting rules are built on.

/// Crafting categories and per-category influence point sums.
pub mod category;
/// Error types used throughout the crate.
pub mod error;
/// Reagents and the reagent catalog.
pub mod reagent;
/// Rarity tiers with their difficulty and cost tables.
pub mod rarity;
/// Weighted slots, harvest tables, and table storage.
pub mod table;

/// Re-export category types.
pub use category::{Category, IpSums};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export reagent types.
pub use reagent::{Reagent, ReagentCatalog};
/// Re-export rarity tiers.
pub use rarity::Rarity;
/// Re-export table types.
pub use table::{HarvestTable, MemoryTableStore, TableStore, WeightedSlot};
