//! Board column type and the fixed default layout

use serde::{Deserialize, Serialize};
use teamspace_common::PostId;

use super::ColumnId;

/// Titles of the three columns every fresh board starts with
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["Backlog", "In Progress", "Done"];

/// A workflow column on one post's board.
///
/// Columns are displayed sorted by ascending `order`. Nothing keeps the
/// orders contiguous after a column is deleted; gaps are fine because
/// only the relative ordering matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    /// Unique column identifier
    pub id: ColumnId,
    /// The post this column belongs to
    pub post_id: PostId,
    /// Column title shown in the board header
    pub title: String,
    /// Position among the post's columns, ascending left to right
    pub order: usize,
}

impl BoardColumn {
    /// Creates a new column with a fresh id.
    pub fn new(post_id: PostId, title: impl Into<String>, order: usize) -> Self {
        Self {
            id: ColumnId::new(),
            post_id,
            title: title.into(),
            order,
        }
    }

    /// The three default columns for a post whose board has none yet.
    pub fn defaults(post_id: &PostId) -> Vec<Self> {
        DEFAULT_COLUMN_TITLES
            .iter()
            .enumerate()
            .map(|(order, title)| Self::new(post_id.clone(), *title, order))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_the_standard_workflow() {
        let post = PostId::new();
        let columns = BoardColumn::defaults(&post);

        assert_eq!(columns.len(), 3);
        for (index, column) in columns.iter().enumerate() {
            assert_eq!(column.title, DEFAULT_COLUMN_TITLES[index]);
            assert_eq!(column.order, index);
            assert_eq!(column.post_id, post);
        }
    }

    #[test]
    fn test_round_trips_through_json() {
        let column = BoardColumn::new(PostId::from_string("post-1"), "Backlog", 0);
        let json = serde_json::to_string(&column).unwrap();
        let back: BoardColumn = serde_json::from_str(&json).unwrap();

        assert_eq!(back, column);
    }
}
