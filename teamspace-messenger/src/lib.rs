//! Direct and group chats with read tracking.
//!
//! Chats are persisted as one collection; each chat's messages live in a
//! keyed collection under the chat id, and every chat embeds a copy of
//! its most recent message so listings never load message files. The
//! read/unread logic lives in [`chat`] as pure functions;
//! [`MessengerContext`] ties it to storage.

pub mod chat;
pub mod context;
pub mod error;
pub mod types;

pub use chat::*;
pub use context::*;
pub use error::*;
pub use types::*;
