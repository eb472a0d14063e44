//! Teamspace Store Crate
//!
//! File-backed JSON persistence for the teamspace engines. Collections are
//! stored under a single data directory, either as one file per collection
//! (`users.json`) or as one file per key for collections owned by a post
//! (`documents/<post-id>.json`). All writes are atomic via a temp file and
//! rename; a missing file reads back as the empty collection.

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{resolve_data_dir, JsonStore, DATA_DIR_NAME};
