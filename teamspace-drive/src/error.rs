//! Error types for drive operations

use thiserror::Error;

/// Errors that can occur while operating on the drive
#[derive(Debug, Error)]
pub enum DriveError {
    /// File or folder not found
    #[error("file not found: {id}")]
    FileNotFound { id: String },

    /// The target of a move or create is not a folder
    #[error("not a folder: {id}")]
    NotAFolder { id: String },

    /// Storage error
    #[error("storage error: {0}")]
    Store(#[from] teamspace_store::StoreError),
}

/// Result type for drive operations
pub type Result<T> = std::result::Result<T, DriveError>;
