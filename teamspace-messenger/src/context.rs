//! The messenger context: chat and message operations over a
//! [`JsonStore`].

use teamspace_common::UserId;
use teamspace_store::JsonStore;
use tracing::debug;

use crate::chat;
use crate::error::{MessengerError, Result};
use crate::types::{Chat, ChatId, Message};

/// Singleton collection chats are stored under
pub const CHATS_COLLECTION: &str = "chats";

/// Keyed collection messages are stored under, one file per chat
pub const MESSAGES_COLLECTION: &str = "messages";

/// Operations on chats and their messages.
///
/// Wraps a [`JsonStore`]; the chat list is one collection, and each
/// chat's messages live under a key derived from the chat id. Sending
/// and read updates keep the chat's embedded `last_message` copy in step
/// with the message collection.
#[derive(Debug, Clone)]
pub struct MessengerContext {
    store: JsonStore,
}

impl MessengerContext {
    /// Creates a messenger over the given store.
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Opens the direct chat between the given users, creating it on
    /// first use. An existing direct chat with the same participant set
    /// is returned instead of a duplicate, regardless of listing order.
    pub async fn create_direct_chat(&self, participants: Vec<UserId>) -> Result<Chat> {
        let mut chats = self.load_chats().await?;
        if let Some(existing) = chat::find_direct_chat(&chats, &participants) {
            return Ok(existing.clone());
        }

        let created = Chat::direct(participants);
        chats.push(created.clone());
        self.save_chats(&chats).await?;
        Ok(created)
    }

    /// Creates a named group chat. Groups are never deduplicated.
    pub async fn create_group_chat(
        &self,
        name: impl Into<String>,
        participants: Vec<UserId>,
    ) -> Result<Chat> {
        let mut chats = self.load_chats().await?;
        let created = Chat::group(name, participants);
        chats.push(created.clone());
        self.save_chats(&chats).await?;
        Ok(created)
    }

    /// Deletes a chat along with its messages.
    pub async fn delete_chat(&self, id: &ChatId) -> Result<()> {
        let mut chats = self.load_chats().await?;
        let before = chats.len();
        chats.retain(|c| &c.id != id);
        if chats.len() == before {
            return Err(MessengerError::ChatNotFound { id: id.to_string() });
        }

        self.save_chats(&chats).await?;
        self.store
            .remove_keyed(MESSAGES_COLLECTION, id.as_str())
            .await?;
        debug!("deleted chat {}", id);
        Ok(())
    }

    /// Appends a message to a chat and refreshes its `last_message`.
    pub async fn send_message(
        &self,
        chat_id: &ChatId,
        sender: &UserId,
        content: impl Into<String>,
    ) -> Result<Message> {
        let mut chats = self.load_chats().await?;
        let Some(target) = chats.iter_mut().find(|c| &c.id == chat_id) else {
            return Err(MessengerError::ChatNotFound {
                id: chat_id.to_string(),
            });
        };

        let message = Message::new(chat_id.clone(), sender.clone(), content);
        let mut messages = self.load_messages(chat_id).await?;
        messages.push(message.clone());
        self.save_messages(chat_id, &messages).await?;

        target.last_message = Some(message.clone());
        self.save_chats(&chats).await?;
        Ok(message)
    }

    /// A chat's messages in send order.
    pub async fn messages(&self, chat_id: &ChatId) -> Result<Vec<Message>> {
        self.require_chat(chat_id).await?;
        self.load_messages(chat_id).await
    }

    /// Marks every message in the chat the reader did not send as read
    /// by them, refreshing the embedded `last_message` copy.
    pub async fn mark_read(&self, chat_id: &ChatId, reader: &UserId) -> Result<()> {
        let mut chats = self.load_chats().await?;
        let Some(target) = chats.iter_mut().find(|c| &c.id == chat_id) else {
            return Err(MessengerError::ChatNotFound {
                id: chat_id.to_string(),
            });
        };

        let messages = self.load_messages(chat_id).await?;
        let next = chat::mark_read(&messages, reader);
        self.save_messages(chat_id, &next).await?;

        target.last_message = next.last().cloned();
        self.save_chats(&chats).await?;
        Ok(())
    }

    /// How many messages in the chat the reader has not seen yet.
    pub async fn unread_count(&self, chat_id: &ChatId, reader: &UserId) -> Result<usize> {
        self.require_chat(chat_id).await?;
        let messages = self.load_messages(chat_id).await?;
        Ok(chat::unread_count(&messages, reader))
    }

    /// The chats a user takes part in, most recently active first.
    pub async fn chats_for(&self, user: &UserId) -> Result<Vec<Chat>> {
        let chats = self.load_chats().await?;
        Ok(chat::chats_for(&chats, user))
    }

    async fn require_chat(&self, id: &ChatId) -> Result<()> {
        let chats = self.load_chats().await?;
        if chats.iter().any(|c| &c.id == id) {
            Ok(())
        } else {
            Err(MessengerError::ChatNotFound { id: id.to_string() })
        }
    }

    async fn load_chats(&self) -> Result<Vec<Chat>> {
        Ok(self.store.load_all(CHATS_COLLECTION).await?)
    }

    async fn save_chats(&self, chats: &[Chat]) -> Result<()> {
        Ok(self.store.save_all(CHATS_COLLECTION, chats).await?)
    }

    async fn load_messages(&self, chat_id: &ChatId) -> Result<Vec<Message>> {
        Ok(self
            .store
            .load_keyed(MESSAGES_COLLECTION, chat_id.as_str())
            .await?)
    }

    async fn save_messages(&self, chat_id: &ChatId, messages: &[Message]) -> Result<()> {
        Ok(self
            .store
            .save_keyed(MESSAGES_COLLECTION, chat_id.as_str(), messages)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, MessengerContext) {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::init(temp.path()).await.unwrap();
        (temp, MessengerContext::new(store))
    }

    fn user(name: &str) -> UserId {
        UserId::from_string(name)
    }

    #[tokio::test]
    async fn test_direct_chats_are_deduplicated_by_participant_set() {
        let (_temp, messenger) = setup().await;

        let first = messenger
            .create_direct_chat(vec![user("alice"), user("bob")])
            .await
            .unwrap();
        let second = messenger
            .create_direct_chat(vec![user("bob"), user("alice")])
            .await
            .unwrap();
        assert_eq!(first.id, second.id);

        let other = messenger
            .create_direct_chat(vec![user("alice"), user("carol")])
            .await
            .unwrap();
        assert_ne!(first.id, other.id);

        // A group with the same members is still its own chat.
        messenger
            .create_group_chat("Pair", vec![user("alice"), user("bob")])
            .await
            .unwrap();
        assert_eq!(messenger.chats_for(&user("alice")).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_send_message_updates_last_message() {
        let (_temp, messenger) = setup().await;
        let chat = messenger
            .create_direct_chat(vec![user("alice"), user("bob")])
            .await
            .unwrap();

        messenger.send_message(&chat.id, &user("alice"), "hi").await.unwrap();
        let sent = messenger
            .send_message(&chat.id, &user("alice"), "lunch?")
            .await
            .unwrap();

        let listed = messenger.chats_for(&user("bob")).await.unwrap();
        let preview = listed[0].last_message.as_ref().unwrap();
        assert_eq!(preview.id, sent.id);
        assert_eq!(preview.content, "lunch?");

        let messages = messenger.messages(&chat.id).await.unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[tokio::test]
    async fn test_send_to_unknown_chat_is_reported() {
        let (_temp, messenger) = setup().await;
        let err = messenger
            .send_message(&ChatId::from_string("ghost"), &user("alice"), "hello?")
            .await
            .unwrap_err();
        assert!(matches!(err, MessengerError::ChatNotFound { .. }));
    }

    #[tokio::test]
    async fn test_mark_read_clears_unread_for_reader_only() {
        let (_temp, messenger) = setup().await;
        let chat = messenger
            .create_direct_chat(vec![user("alice"), user("bob")])
            .await
            .unwrap();
        for content in ["one", "two", "three"] {
            messenger.send_message(&chat.id, &user("alice"), content).await.unwrap();
        }

        assert_eq!(messenger.unread_count(&chat.id, &user("bob")).await.unwrap(), 3);
        // The sender has nothing unread in their own messages.
        assert_eq!(messenger.unread_count(&chat.id, &user("alice")).await.unwrap(), 0);

        messenger.mark_read(&chat.id, &user("bob")).await.unwrap();
        assert_eq!(messenger.unread_count(&chat.id, &user("bob")).await.unwrap(), 0);

        // The embedded preview reflects the read state.
        let listed = messenger.chats_for(&user("bob")).await.unwrap();
        let preview = listed[0].last_message.as_ref().unwrap();
        assert_eq!(preview.read_by, [user("bob")]);
    }

    #[tokio::test]
    async fn test_delete_chat_cascades_messages() {
        let (_temp, messenger) = setup().await;
        let chat = messenger
            .create_direct_chat(vec![user("alice"), user("bob")])
            .await
            .unwrap();
        messenger.send_message(&chat.id, &user("alice"), "hi").await.unwrap();

        messenger.delete_chat(&chat.id).await.unwrap();

        assert!(messenger.chats_for(&user("alice")).await.unwrap().is_empty());
        let orphaned: Vec<Message> = messenger
            .store()
            .load_keyed(MESSAGES_COLLECTION, chat.id.as_str())
            .await
            .unwrap();
        assert!(orphaned.is_empty());
    }

    #[tokio::test]
    async fn test_chats_sort_by_most_recent_activity() {
        let (_temp, messenger) = setup().await;
        let old = messenger
            .create_direct_chat(vec![user("alice"), user("bob")])
            .await
            .unwrap();
        messenger
            .create_direct_chat(vec![user("alice"), user("carol")])
            .await
            .unwrap();

        // A new message bumps the older chat to the top.
        messenger.send_message(&old.id, &user("bob"), "ping").await.unwrap();

        let listed = messenger.chats_for(&user("alice")).await.unwrap();
        assert_eq!(listed[0].id, old.id);
    }
}
