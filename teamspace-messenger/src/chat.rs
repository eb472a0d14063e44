//! Pure read-tracking and listing helpers.
//!
//! Message functions operate on one chat's message list (messages are
//! stored per chat); chat functions operate on the chat collection.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use teamspace_common::UserId;

use crate::types::{Chat, ChatKind, Message};

/// Whether two participant lists name the same set of users
pub fn same_participants(a: &[UserId], b: &[UserId]) -> bool {
    let a: BTreeSet<&UserId> = a.iter().collect();
    let b: BTreeSet<&UserId> = b.iter().collect();
    a == b
}

/// The existing direct chat between exactly this set of participants
pub fn find_direct_chat<'a>(chats: &'a [Chat], participants: &[UserId]) -> Option<&'a Chat> {
    chats
        .iter()
        .find(|c| c.kind == ChatKind::Direct && same_participants(&c.participants, participants))
}

/// Mark every message the reader did not send as read by them
pub fn mark_read(messages: &[Message], reader: &UserId) -> Vec<Message> {
    let mut next = messages.to_vec();
    for message in next.iter_mut() {
        if &message.sender_id != reader && !message.read_by.contains(reader) {
            message.read_by.push(reader.clone());
        }
    }
    next
}

/// How many messages the reader has not seen yet. Messages they sent
/// themselves never count.
pub fn unread_count(messages: &[Message], reader: &UserId) -> usize {
    messages
        .iter()
        .filter(|m| &m.sender_id != reader && !m.read_by.contains(reader))
        .count()
}

/// When the chat last saw activity: its most recent message, or its
/// creation when no message was sent yet
pub fn last_activity(chat: &Chat) -> DateTime<Utc> {
    chat.last_message
        .as_ref()
        .map(|m| m.created_at)
        .unwrap_or(chat.created_at)
}

/// The chats a user takes part in, most recently active first
pub fn chats_for(chats: &[Chat], user: &UserId) -> Vec<Chat> {
    let mut mine: Vec<Chat> = chats
        .iter()
        .filter(|c| c.has_participant(user))
        .cloned()
        .collect();
    mine.sort_by_key(|c| Reverse(last_activity(c)));
    mine
}
