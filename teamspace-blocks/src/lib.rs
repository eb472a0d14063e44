//! Teamspace Blocks Crate
//!
//! The block document model: an ordered sequence of typed content blocks
//! with per-type payloads (checklist, table, image), inline @mentions, and
//! pure copy-on-write edit operations. Block order is the array index;
//! every operation takes the current sequence and returns a new one.
//!
//! The pure core never touches storage. [`DocumentController`] hosts one
//! post's sequence over a [`DocumentStore`], persisting after each edit.

pub mod controller;
pub mod document;
pub mod error;
pub mod mention_parser;
pub mod resolver;
pub mod types;

// Re-export main types
pub use controller::*;
pub use document::*;
pub use error::*;
pub use mention_parser::*;
pub use resolver::*;
pub use types::*;
