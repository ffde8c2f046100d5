//! Chat message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the user.
    User,
    /// Generated on behalf of a pet.
    Pet,
}

/// Free-form metadata describing what a pet reply represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAction {
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A single entry in the chat log.
///
/// Messages are immutable once created; the log's insertion order is its
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Text content; `*...*` spans denote actions
    pub content: String,
    /// Author of the message
    pub sender: Sender,
    /// Identifier of the pet this conversation belongs to
    pub pet_id: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Action metadata attached to simulated replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MessageAction>,
    /// Decorative sticker URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_url: Option<String>,
}

impl Message {
    fn new(sender: Sender, pet_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            pet_id: pet_id.into(),
            timestamp: Utc::now(),
            action: None,
            sticker_url: None,
        }
    }

    /// Creates a message typed by the user in `pet_id`'s conversation.
    pub fn from_user(pet_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Sender::User, pet_id, content)
    }

    /// Creates a message authored by the pet `pet_id`.
    pub fn from_pet(pet_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Sender::Pet, pet_id, content)
    }

    pub fn with_action(mut self, action: Option<MessageAction>) -> Self {
        self.action = action;
        self
    }

    pub fn with_sticker(mut self, sticker_url: Option<String>) -> Self {
        self.sticker_url = sticker_url;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
