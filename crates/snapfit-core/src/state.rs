//! UI-agnostic conversation state types
//!
//! These are plain values shared between the conversation model and whatever
//! front end renders them. Nothing here depends on a UI framework.

use chrono::{Local, TimeZone, Utc};
use uuid::Uuid;

/// A chat message in the coach conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    /// Local wall-clock label ("HH:MM") for the message timestamp
    pub fn time_label(&self) -> String {
        Local
            .timestamp_millis_opt(self.timestamp)
            .single()
            .map(|time| time.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Snapshot of the conversation screen: what a renderer needs, nothing more
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub is_typing: bool,
}

impl ConversationState {
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_get_unique_ids() {
        let a = ChatMessage::user("hello");
        let b = ChatMessage::user("hello");
        assert_ne!(a.id, b.id);
        assert!(a.is_user());
        assert!(!ChatMessage::assistant("hi").is_user());
    }

    #[test]
    fn test_time_label_format() {
        let msg = ChatMessage::assistant("hi");
        let label = msg.time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.chars().nth(2), Some(':'));
    }
}
