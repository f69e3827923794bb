//! Error types for the draw widget

use thiserror::Error;

/// Draw widget error type
///
/// Every variant is recoverable: the operation that raised it leaves
/// state unchanged and the widget returns to a ready state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// Entry text was empty after trimming
    #[error("Entry text is empty")]
    EmptyInput,

    /// An identical entry already exists in the registry
    #[error("Entry already exists: {0}")]
    DuplicateEntry(String),

    /// Removal index outside the registry bounds
    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Registry length at the time of the call
        len: usize,
    },

    /// Clear requested on an already-empty collection
    #[error("Nothing to clear")]
    NothingToClear,

    /// Draw requested with no entries to pick from
    #[error("Registry is empty")]
    EmptyRegistry,

    /// Storage load or save failure; the widget keeps running in memory
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for draw operations
pub type DrawResult<T> = Result<T, DrawError>;
