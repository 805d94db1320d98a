use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The role of a message sender within a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The site visitor
    User,
    /// The assistant
    Bot,
}

/// Represents a single message within a chat session.
///
/// Messages are created on send or on reply, never mutated afterwards, and
/// live only as long as the session (no persistence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The text content of the message.
    pub text: String,
    /// Who produced the message.
    pub sender: Sender,
    /// Unix timestamp of when the message was created.
    pub created_at: i64,
}

impl Message {
    /// Build a user message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    /// Build a bot message stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            created_at: Utc::now().timestamp(),
        }
    }
}
