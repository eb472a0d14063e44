//! Error types for the document engine

use thiserror::Error;

/// Result type for document hosting operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors surfaced by the document hosting layer.
///
/// The pure operations in [`crate::document`] are total functions and never
/// fail; only loading and persisting a document can.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Underlying storage failure
    #[error("storage error: {0}")]
    Store(#[from] teamspace_store::StoreError),
}
