// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::chat_messages;

/// Kind of chat message. Non-text kinds carry a media reference in `content`,
/// stored verbatim; the service never touches the referenced media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Image,
    Audio,
    Video,
    Emoji,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Text => "text",
            MessageType::Image => "image",
            MessageType::Audio => "audio",
            MessageType::Video => "video",
            MessageType::Emoji => "emoji",
        }
    }
}

/// Ephemeral chat message. `expires_at` is fixed at creation and never
/// extended; reads filter on it regardless of `is_read` or match state.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub match_id: Uuid,
    pub sender_id: String,
    pub message_type: String,
    pub content: String,
    pub mood_emoji: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_read: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = chat_messages)]
pub struct NewChatMessage {
    pub match_id: Uuid,
    pub sender_id: String,
    pub message_type: String,
    pub content: String,
    pub mood_emoji: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_type_round_trips_as_lowercase() {
        assert_eq!(serde_json::to_string(&MessageType::Audio).unwrap(), "\"audio\"");
        let parsed: MessageType = serde_json::from_str("\"emoji\"").unwrap();
        assert_eq!(parsed, MessageType::Emoji);
        assert!(serde_json::from_str::<MessageType>("\"gif\"").is_err());
    }
}
