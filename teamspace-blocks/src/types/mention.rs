//! Inline mention types

use serde::{Deserialize, Serialize};

/// The kind of entity a mention points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    User,
    Post,
    Project,
}

/// An inline reference from a text-bearing block to a user, post, or project.
///
/// Holds only the foreign id and a cached display name; the reference is
/// weak and never traversed. The same shape doubles as a resolver
/// candidate: picking a candidate appends it to the block's mentions as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub entity_id: String,
    pub kind: MentionKind,
    pub display_name: String,
}

impl Mention {
    /// Create a mention pointing at the given entity
    pub fn new(
        entity_id: impl Into<String>,
        kind: MentionKind,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            kind,
            display_name: display_name.into(),
        }
    }

    /// The literal token that represents this mention in block content
    pub fn token(&self) -> String {
        format!("@{}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prefixes_display_name() {
        let m = Mention::new("u1", MentionKind::User, "Alice");
        assert_eq!(m.token(), "@Alice");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let m = Mention::new("p1", MentionKind::Project, "Apollo");
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"kind\":\"project\""));
    }
}
