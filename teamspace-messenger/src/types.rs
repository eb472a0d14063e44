//! Chat and message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamspace_common::{define_id, UserId};

define_id!(
    /// Unique identifier for a chat
    ChatId
);

define_id!(
    /// Unique identifier for a message
    MessageId
);

/// Whether a chat is a two-person conversation or a named group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Direct,
    Group,
}

/// One message inside a chat.
///
/// `read_by` lists the participants who have seen the message; the
/// sender is never added to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier
    pub id: MessageId,
    /// The chat this message belongs to
    pub chat_id: ChatId,
    /// The user who sent the message
    pub sender_id: UserId,
    /// Message body
    pub content: String,
    /// Participants who have read the message, excluding the sender
    #[serde(default)]
    pub read_by: Vec<UserId>,
    /// When the message was sent
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a message with a fresh id and an empty read list.
    pub fn new(chat_id: ChatId, sender_id: UserId, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            chat_id,
            sender_id,
            content: content.into(),
            read_by: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// A conversation between two or more users.
///
/// `last_message` is an embedded copy of the most recent message so chat
/// listings can show previews and sort by activity without loading any
/// message collection. It is refreshed on send and on read updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Unique chat identifier
    pub id: ChatId,
    /// Direct or group
    pub kind: ChatKind,
    /// Group name; direct chats are unnamed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The users in the conversation
    pub participants: Vec<UserId>,
    /// Copy of the most recent message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    /// When the chat was created
    pub created_at: DateTime<Utc>,
}

impl Chat {
    /// Creates a direct chat between the given participants.
    pub fn direct(participants: Vec<UserId>) -> Self {
        Self {
            id: ChatId::new(),
            kind: ChatKind::Direct,
            name: None,
            participants,
            last_message: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a named group chat.
    pub fn group(name: impl Into<String>, participants: Vec<UserId>) -> Self {
        Self {
            id: ChatId::new(),
            kind: ChatKind::Group,
            name: Some(name.into()),
            participants,
            last_message: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the user takes part in this chat.
    pub fn has_participant(&self, user: &UserId) -> bool {
        self.participants.contains(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_chats_are_unnamed() {
        let chat = Chat::direct(vec![UserId::from_string("a"), UserId::from_string("b")]);
        assert_eq!(chat.kind, ChatKind::Direct);
        assert_eq!(chat.name, None);
        assert_eq!(chat.last_message, None);
    }

    #[test]
    fn test_absent_last_message_stays_off_the_wire() {
        let chat = Chat::group("Launch", vec![UserId::from_string("a")]);
        let json = serde_json::to_string(&chat).unwrap();
        assert!(!json.contains("last_message"));
    }
}
