// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::MatchError;
use crate::matching::messages;
use crate::models::message::MessageType;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesQuery {
    /// Optional RFC 3339 cut-off for the expiry filter; defaults to now.
    pub as_of: Option<DateTime<Utc>>,
}

/// List a match's unexpired messages, oldest first.
pub async fn get_messages(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(match_id): Path<Uuid>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let as_of = query.as_of.unwrap_or_else(Utc::now);
    let messages = messages::list_messages(&mut conn, match_id, &user_id, as_of).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "messages": messages
        })),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
    pub message_type: MessageType,
    pub mood_emoji: Option<String>,
}

/// Append a message to one of the caller's active matches.
pub async fn send_message(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(match_id): Path<Uuid>,
    Json(body): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let message = messages::send_message(
        &mut conn,
        match_id,
        &user_id,
        body.message_type,
        &body.content,
        body.mood_emoji.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": message
        })),
    ))
}

/// Maintenance trigger for the expiration reaper. Idempotent. Requires a
/// resolved identity like every other mutating route; finer-grained admin
/// authorization is the gateway's concern.
pub async fn purge_expired(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(_caller): AuthenticatedUser,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let deleted = messages::purge_expired(&mut conn, Utc::now()).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "deletedCount": deleted
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_accepts_client_payload() {
        let body = r#"{"content":"hi","messageType":"text","moodEmoji":"😭"}"#;
        let req: SendMessageRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.content, "hi");
        assert_eq!(req.message_type, MessageType::Text);
        assert_eq!(req.mood_emoji.as_deref(), Some("😭"));
    }

    #[test]
    fn messages_query_parses_as_of_cutoff() {
        let query: MessagesQuery =
            serde_json::from_str(r#"{"asOf":"2026-08-30T12:00:00Z"}"#).unwrap();
        assert!(query.as_of.is_some());

        let query: MessagesQuery = serde_json::from_str("{}").unwrap();
        assert!(query.as_of.is_none());
    }
}
