//! Checklist payload types

use super::ids::ChecklistItemId;
use serde::{Deserialize, Serialize};

/// One entry in a checklist block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    /// Create an empty unchecked item
    pub fn new() -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: String::new(),
            checked: false,
        }
    }

    /// Set the item text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the checked state
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

impl Default for ChecklistItem {
    fn default() -> Self {
        Self::new()
    }
}
