//! Kanban board model for teamspace posts.
//!
//! Every post carries a board: a set of ordered columns and the items
//! filed under them. The board logic itself lives in [`board`] as pure
//! functions over slices; [`BoardController`] binds those functions to
//! a post's persisted state.

pub mod board;
pub mod controller;
pub mod error;
pub mod types;

pub use board::*;
pub use controller::*;
pub use error::*;
pub use types::*;
