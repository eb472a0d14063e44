//! Posts: the unit of collaboration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamspace_common::{PostId, ProjectId};

/// One post inside a project.
///
/// The post record itself is small; its document lives in the `documents`
/// collection and its board in the `board_columns` / `board_items`
/// collections, all keyed by the post id. `order` positions the post
/// within its project; moving a post to another project keeps the order
/// value, with display ties resolved by stable sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: PostId,
    /// The project this post is filed under
    pub project_id: ProjectId,
    /// Post title, also the default text for post mentions
    pub title: String,
    /// Position within the owning project
    pub order: usize,
    /// When the post was created
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Creates a new post with a fresh id.
    pub fn new(project_id: ProjectId, title: impl Into<String>, order: usize) -> Self {
        Self {
            id: PostId::new(),
            project_id,
            title: title.into(),
            order,
            created_at: Utc::now(),
        }
    }
}
