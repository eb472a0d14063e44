//! Error types for messenger operations

use thiserror::Error;

/// Errors that can occur while operating on chats
#[derive(Debug, Error)]
pub enum MessengerError {
    /// Chat not found
    #[error("chat not found: {id}")]
    ChatNotFound { id: String },

    /// Storage error
    #[error("storage error: {0}")]
    Store(#[from] teamspace_store::StoreError),
}

/// Result type for messenger operations
pub type Result<T> = std::result::Result<T, MessengerError>;
