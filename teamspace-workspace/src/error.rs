//! Error types for workspace operations

use thiserror::Error;

/// Errors that can occur while operating on the workspace directory
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A user with this email already exists
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    /// User not found
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// Project not found
    #[error("project not found: {id}")]
    ProjectNotFound { id: String },

    /// Post not found
    #[error("post not found: {id}")]
    PostNotFound { id: String },

    /// Storage error
    #[error("storage error: {0}")]
    Store(#[from] teamspace_store::StoreError),

    /// Document cascade error
    #[error("document error: {0}")]
    Document(#[from] teamspace_blocks::DocumentError),

    /// Board cascade error
    #[error("board error: {0}")]
    Board(#[from] teamspace_kanban::BoardError),
}

/// Result type for workspace operations
pub type Result<T> = std::result::Result<T, WorkspaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = WorkspaceError::DuplicateEmail {
            email: "a@b.c".to_string(),
        };
        assert_eq!(err.to_string(), "email already registered: a@b.c");

        let err = WorkspaceError::PostNotFound {
            id: "post-1".to_string(),
        };
        assert_eq!(err.to_string(), "post not found: post-1");
    }
}
