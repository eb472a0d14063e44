//! Error types for calendar operations

use thiserror::Error;

/// Errors that can occur while operating on the calendar
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Event not found
    #[error("event not found: {id}")]
    EventNotFound { id: String },

    /// Storage error
    #[error("storage error: {0}")]
    Store(#[from] teamspace_store::StoreError),
}

/// Result type for calendar operations
pub type Result<T> = std::result::Result<T, CalendarError>;
