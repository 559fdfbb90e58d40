use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

/// One entry of the chat log. Entries are appended and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
        }
    }
}

/// The reply currently shown above the character, until `visible_until`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechBubble {
    pub message: String,
    pub visible_until: DateTime<Utc>,
}

impl SpeechBubble {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now < self.visible_until
    }
}
