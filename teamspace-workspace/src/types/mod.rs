//! Core types for the workspace directory

mod post;
mod project;
mod user;

pub use post::Post;
pub use project::Project;
pub use user::{Role, User, UserPatch};
