//! Shared identifier types for the teamspace crates.
//!
//! Every entity in the workspace is keyed by a ULID-backed string id. The
//! [`define_id!`] macro produces one newtype per entity kind so ids of
//! different kinds cannot be mixed up; the ids that cross crate boundaries
//! (`PostId`, `UserId`, `ProjectId`) live here, while each domain crate
//! defines its own local ids with the same macro.

pub mod ids;

pub use ids::{PostId, ProjectId, UserId};
