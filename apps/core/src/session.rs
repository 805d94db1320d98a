//! In-memory chat session.
//!
//! Holds the append-only message list behind the chat panel: user messages
//! and bot replies, rendered in submission order. Nothing is persisted;
//! the transcript dies with the session.

use uuid::Uuid;

use crate::brain::AssistantBrain;
use crate::models::Message;

/// A chat session and its ordered transcript.
pub struct ChatSession {
    id: String,
    messages: Vec<Message>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Start an empty session with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
        }
    }

    /// The unique identifier for the session (UUID).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record a bot message, e.g. the opening welcome.
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(Message::bot(text));
    }

    /// Submit one user message: appends it to the transcript, classifies it,
    /// appends the bot reply, and returns the reply text.
    pub fn submit(&mut self, brain: &AssistantBrain, text: &str) -> String {
        self.messages.push(Message::user(text));
        let reply = brain.classify(text);
        self.push_bot(reply.clone());
        reply
    }

    /// The transcript so far, in submission order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
