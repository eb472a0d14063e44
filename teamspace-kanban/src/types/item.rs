//! Board item type, creation fields, and update patches

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use teamspace_common::UserId;

use super::{ColumnId, ItemId};

/// Urgency level of a board item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A card filed under one column of a post's board.
///
/// Items are displayed per column, sorted by ascending `order`. The
/// `status` field mirrors the owning column's title and is rewritten
/// whenever the item moves or its column is renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique item identifier
    pub id: ItemId,
    /// The column this item is filed under
    pub column_id: ColumnId,
    /// Item title shown on the card
    pub title: String,
    /// Longer free-form description
    #[serde(default)]
    pub description: String,
    /// Users assigned to this item
    #[serde(default)]
    pub assignees: Vec<UserId>,
    /// Urgency level
    #[serde(default)]
    pub priority: Priority,
    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// The owning column's title at the time of the last move or rename
    #[serde(default)]
    pub status: String,
    /// Position within the owning column, ascending top to bottom
    pub order: usize,
}

/// Fields supplied when creating an item. The column, status, and order
/// are derived at add time and are not part of the input.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub assignees: Vec<UserId>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl NewItem {
    /// Creates item fields with the given title and defaults elsewhere.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the assignees.
    pub fn with_assignees(mut self, assignees: Vec<UserId>) -> Self {
        self.assignees = assignees;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// A partial update to a board item. `None` fields are left untouched;
/// the due date uses a nested `Option` so it can be cleared as well as
/// set. Column, status, and order are owned by the move operations and
/// cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignees: Option<Vec<UserId>>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl ItemPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the assignee list.
    pub fn assignees(mut self, assignees: Vec<UserId>) -> Self {
        self.assignees = Some(assignees);
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Applies the patch to an item, overwriting only the set fields.
    pub fn apply(self, item: &mut BoardItem) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(assignees) = self.assignees {
            item.assignees = assignees;
        }
        if let Some(priority) = self.priority {
            item.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            item.due_date = due_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> BoardItem {
        BoardItem {
            id: ItemId::from_string("item-1"),
            column_id: ColumnId::from_string("col-1"),
            title: "Fix login".to_string(),
            description: String::new(),
            assignees: Vec::new(),
            priority: Priority::default(),
            due_date: None,
            status: "Backlog".to_string(),
            order: 0,
        }
    }

    #[test]
    fn test_patch_overwrites_only_set_fields() {
        let mut target = item();
        ItemPatch::new()
            .title("Fix signup")
            .priority(Priority::High)
            .apply(&mut target);

        assert_eq!(target.title, "Fix signup");
        assert_eq!(target.priority, Priority::High);
        assert_eq!(target.status, "Backlog");
        assert_eq!(target.order, 0);
    }

    #[test]
    fn test_patch_can_set_and_clear_due_date() {
        let mut target = item();
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

        ItemPatch::new().due_date(date).apply(&mut target);
        assert_eq!(target.due_date, Some(date));

        ItemPatch::new().clear_due_date().apply(&mut target);
        assert_eq!(target.due_date, None);

        // An empty patch leaves the date alone either way.
        ItemPatch::new().apply(&mut target);
        assert_eq!(target.due_date, None);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let back: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(back, Priority::Low);
    }

    #[test]
    fn test_missing_optional_fields_default_on_load() {
        let json = r#"{
            "id": "item-9",
            "column_id": "col-1",
            "title": "Bare item",
            "order": 2
        }"#;
        let loaded: BoardItem = serde_json::from_str(json).unwrap();

        assert_eq!(loaded.description, "");
        assert!(loaded.assignees.is_empty());
        assert_eq!(loaded.priority, Priority::Medium);
        assert_eq!(loaded.due_date, None);
        assert_eq!(loaded.status, "");
        assert_eq!(loaded.order, 2);
    }
}
