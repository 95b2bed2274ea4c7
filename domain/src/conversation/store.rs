//! Session Store: the transcript plus the session identifier.
//!
//! The store is the single owner of conversation state. It performs no I/O and
//! has no failure modes; the controller is its only writer.

use super::entities::{Message, Role};
use super::session::Session;
use crate::formatting::{Block, format_response};

/// Append-only transcript and session token for one conversation
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    messages: Vec<Message>,
    session: Session,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose transcript opens with an assistant greeting
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let blocks = format_response(&greeting);
        let mut store = Self::new();
        store.append_assistant(greeting, blocks);
        store
    }

    /// Append a message and return its position in the transcript.
    ///
    /// Assistant messages appended this way are formatted on the spot.
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) -> usize {
        let content = content.into();
        let message = match role {
            Role::User => Message::user(content),
            Role::Assistant => {
                let blocks = format_response(&content);
                Message::assistant(content, blocks)
            }
        };
        self.push(message)
    }

    /// Append an assistant message with blocks that were already computed
    pub fn append_assistant(&mut self, content: impl Into<String>, blocks: Vec<Block>) -> usize {
        self.push(Message::assistant(content, blocks))
    }

    fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.id()
    }

    /// Record the session identifier if none is set yet; otherwise no-op.
    pub fn set_session_id_once(&mut self, id: impl Into<String>) -> bool {
        self.session.set_once(id)
    }

    /// Read-only view of the full transcript
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
