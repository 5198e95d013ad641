use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or storing crafting data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A reagent id appears more than once in a catalog.
    #[error("duplicate reagent id: \"{0}\"")]
    DuplicateReagent(String),

    /// A harvest table id appears more than once in a store.
    #[error("duplicate table id: \"{0}\"")]
    DuplicateTable(String),

    /// A data file could not be read or written.
    #[error("{path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A JSON document was malformed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
