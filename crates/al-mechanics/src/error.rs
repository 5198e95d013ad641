//! Error types for the mechanics engine.

use al_core::CoreError;

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A caller passed an argument outside its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A brew was attempted with no reagents.
    #[error("a brew needs at least one reagent")]
    NoReagents,

    /// A brew was attempted with more reagents than the alembic holds.
    #[error("a brew takes at most {max} reagents, got {got}")]
    TooManyReagents {
        /// The limit.
        max: usize,
        /// How many were supplied.
        got: usize,
    },

    /// A reagent id was not found in the catalog.
    #[error("unknown reagent: {0}")]
    UnknownReagent(String),

    /// A harvest table id was not found in the store.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// Loading or storing crafting data failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
