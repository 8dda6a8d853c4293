// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::MatchError;
use crate::matching::matches::get_match;
use crate::models::message::{ChatMessage, MessageType, NewChatMessage};
use crate::moods;
use crate::schema::{chat_messages, matches};

/// Fixed message lifetime. Not configurable per call.
pub const MESSAGE_TTL_HOURS: i64 = 24;

/// Expiry stamp for a message created at the given instant.
pub fn expiry_for(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::hours(MESSAGE_TTL_HOURS)
}

/// Read-path visibility predicate: a message is visible strictly before its
/// expiry instant.
pub fn is_visible(expires_at: DateTime<Utc>, as_of: DateTime<Utc>) -> bool {
    expires_at > as_of
}

/// Append a message to an active match. The insert and the match's
/// `last_message_at` touch commit as one transaction so neither can be lost
/// without the other.
pub async fn send_message(
    conn: &mut AsyncPgConnection,
    match_id: Uuid,
    sender_id: &str,
    message_type: MessageType,
    content: &str,
    mood_emoji: Option<&str>,
) -> Result<ChatMessage, MatchError> {
    if content.trim().is_empty() {
        return Err(MatchError::InvalidOperation(
            "message content must not be empty".to_string(),
        ));
    }
    if let Some(mood) = mood_emoji {
        if !moods::is_known_mood(mood) {
            return Err(MatchError::InvalidMood(mood.to_string()));
        }
    }

    let message = conn
        .transaction::<ChatMessage, MatchError, _>(|conn| {
            async move {
                let mood_match = get_match(conn, match_id).await?;

                if !mood_match.has_participant(sender_id) {
                    return Err(MatchError::Forbidden(
                        "sender is not a participant of this match".to_string(),
                    ));
                }
                if !mood_match.is_active {
                    return Err(MatchError::Forbidden(
                        "match is no longer active".to_string(),
                    ));
                }

                let created_at = Utc::now();
                let new_message = NewChatMessage {
                    match_id,
                    sender_id: sender_id.to_string(),
                    message_type: message_type.as_str().to_string(),
                    content: content.to_string(),
                    mood_emoji: mood_emoji.map(str::to_string),
                    created_at,
                    expires_at: expiry_for(created_at),
                    is_read: false,
                };

                let message: ChatMessage = diesel::insert_into(chat_messages::table)
                    .values(&new_message)
                    .returning(ChatMessage::as_returning())
                    .get_result(conn)
                    .await?;

                diesel::update(matches::table.find(match_id))
                    .set(matches::last_message_at.eq(created_at))
                    .execute(conn)
                    .await?;

                Ok(message)
            }
            .scope_boxed()
        })
        .await?;

    debug!(
        "Stored message {} on match {} from {}",
        message.id, match_id, sender_id
    );

    Ok(message)
}

/// List a match's unexpired messages, oldest first. `as_of` defaults to now
/// at the HTTP boundary; expired rows are filtered here regardless of whether
/// the reaper has physically removed them yet. Only participants may read.
pub async fn list_messages(
    conn: &mut AsyncPgConnection,
    match_id: Uuid,
    viewer_id: &str,
    as_of: DateTime<Utc>,
) -> Result<Vec<ChatMessage>, MatchError> {
    let mood_match = get_match(conn, match_id).await?;

    if !mood_match.has_participant(viewer_id) {
        return Err(MatchError::Forbidden(
            "viewer is not a participant of this match".to_string(),
        ));
    }

    let messages = chat_messages::table
        .filter(chat_messages::match_id.eq(match_id))
        .filter(chat_messages::expires_at.gt(as_of))
        .order(chat_messages::created_at.asc())
        .load::<ChatMessage>(conn)
        .await?;

    Ok(messages)
}

/// Delete every message whose expiry has passed, across all matches.
/// Idempotent; a second call with no new expirations removes nothing.
/// Unexpired messages survive even when their match is inactive.
pub async fn purge_expired(
    conn: &mut AsyncPgConnection,
    now: DateTime<Utc>,
) -> Result<usize, MatchError> {
    let deleted = diesel::delete(chat_messages::table.filter(chat_messages::expires_at.le(now)))
        .execute(conn)
        .await?;

    if deleted > 0 {
        info!("Purged {} expired chat messages", deleted);
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn expiry_is_exactly_24_hours_after_creation() {
        let created = Utc::now();
        assert_eq!(expiry_for(created) - created, Duration::hours(24));
    }

    #[test_log::test]
    fn message_visible_before_expiry_and_gone_after() {
        let created = Utc::now();
        let expires = expiry_for(created);

        assert!(is_visible(expires, created));
        assert!(is_visible(expires, created + Duration::hours(23)));
        assert!(!is_visible(expires, created + Duration::hours(24)));
        assert!(!is_visible(expires, created + Duration::hours(25)));
    }

    #[test_log::test]
    fn visibility_boundary_is_exclusive_at_expiry() {
        let created = Utc::now();
        let expires = expiry_for(created);
        // asOf == expiresAt counts as expired.
        assert!(!is_visible(expires, expires));
        assert!(is_visible(expires, expires - Duration::milliseconds(1)));
    }
}
