//! State for the assistant chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript is ordered, append-only, and scoped to one browser
//! session: it is never persisted or synced, and resets on reload.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author of a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single transcript message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// Greeting shown before the first exchange.
pub const GREETING: &str = "Hi! I'm your AI assistant. You can ask me to add, \
                            list, complete, or delete tasks. How can I help?";

/// Reply appended when the assistant request fails.
pub const FAILURE_REPLY: &str = "Something went wrong. Please try again.";

/// State for the floating chat widget.
///
/// `thinking` is true while exactly one assistant request is outstanding;
/// the send control stays disabled until it resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub thinking: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage::assistant(GREETING)],
            thinking: false,
        }
    }
}
