//! Shared file tree for a teamspace.
//!
//! Files and folders form a tree through `parent_id` links; the tree
//! logic lives in [`tree`] as pure functions over slices, and
//! [`DriveContext`] persists the flat file list as one collection.

pub mod context;
pub mod error;
pub mod tree;
pub mod types;

pub use context::*;
pub use error::*;
pub use tree::*;
pub use types::*;
