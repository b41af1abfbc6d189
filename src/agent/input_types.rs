use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A single turn of the conversation as sent by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Client-side creation time; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Why a raw message list could not become a [`ChatHistory`].
#[derive(Debug)]
pub enum HistoryError {
    Empty,
    MalformedLatest(serde_json::Error),
}

/// Ordered, non-empty message history.
///
/// Only the last entry is typed. Earlier entries are kept as raw JSON and
/// never validated, since nothing reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatHistory {
    earlier: Vec<Value>,
    latest: ChatMessage,
}

impl ChatHistory {
    /// The last message, the only one the responder looks at.
    pub fn latest(&self) -> &ChatMessage {
        &self.latest
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.earlier.len() + 1
    }
}

impl TryFrom<Vec<Value>> for ChatHistory {
    type Error = HistoryError;

    fn try_from(mut messages: Vec<Value>) -> Result<Self, Self::Error> {
        let latest = messages.pop().ok_or(HistoryError::Empty)?;
        let latest = serde_json::from_value(latest).map_err(HistoryError::MalformedLatest)?;
        Ok(Self {
            earlier: messages,
            latest,
        })
    }
}

#[cfg(test)]
impl TryFrom<Vec<ChatMessage>> for ChatHistory {
    type Error = HistoryError;

    fn try_from(messages: Vec<ChatMessage>) -> Result<Self, Self::Error> {
        let raw = messages
            .into_iter()
            .map(|m| serde_json::to_value(m).unwrap())
            .collect::<Vec<Value>>();
        Self::try_from(raw)
    }
}
