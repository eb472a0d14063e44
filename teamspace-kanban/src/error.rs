//! Error types for board operations

use thiserror::Error;

/// Errors that can occur while loading or saving a board
#[derive(Debug, Error)]
pub enum BoardError {
    /// Storage error
    #[error("storage error: {0}")]
    Store(#[from] teamspace_store::StoreError),
}

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
