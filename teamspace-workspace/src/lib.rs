//! Workspace directory: the users, projects, and posts that everything
//! else hangs off.
//!
//! A post is the unit of collaboration: it owns a block document and a
//! kanban board. Projects group posts in the sidebar; users are the
//! account directory behind login, assignees, and mentions.
//! [`WorkspaceContext`] wraps a [`teamspace_store::JsonStore`] and owns
//! the cascade rules: deleting a post removes its document and board
//! collections, deleting a project cascades through its posts.

pub mod context;
pub mod error;
pub mod types;

pub use context::*;
pub use error::*;
pub use types::*;
