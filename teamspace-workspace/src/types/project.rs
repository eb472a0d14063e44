//! Projects group posts in the sidebar

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamspace_common::ProjectId;

/// A named group of posts.
///
/// Projects are displayed sorted by ascending `order`; new projects are
/// appended after the existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: ProjectId,
    /// Project name shown in the sidebar
    pub name: String,
    /// Position among all projects
    pub order: usize,
    /// When the project was created
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project with a fresh id.
    pub fn new(name: impl Into<String>, order: usize) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            order,
            created_at: Utc::now(),
        }
    }
}
