//! Conversation entities

use crate::formatting::Block;
use serde::{Deserialize, Serialize};

/// Author of a message in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn in the transcript (Entity)
///
/// `content` is always the raw text: what the user typed, or what the backend
/// (or the controller, for failures) produced. Assistant messages additionally
/// carry the formatted blocks computed when they were appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_blocks: Option<Vec<Block>>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            rendered_blocks: None,
        }
    }

    pub fn assistant(content: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            rendered_blocks: Some(blocks),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }

    /// Rendered blocks, empty for user messages
    pub fn blocks(&self) -> &[Block] {
        self.rendered_blocks.as_deref().unwrap_or(&[])
    }
}
