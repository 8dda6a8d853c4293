// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::MatchError;
use crate::matching::swipes;
use crate::models::swipe::SwipeDirection;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    pub swiped_id: String,
    pub direction: SwipeDirection,
    pub mood_emoji: String,
    pub post_id: Option<Uuid>,
}

/// Record a swipe. A fresh right-swipe that completes a reciprocal pair
/// reports `matched: true` with the match record in the same response; a
/// repeat swipe on the same mood round comes back with `duplicate: true`.
pub async fn create_swipe(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Json(body): Json<SwipeRequest>,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let outcome = swipes::record_swipe(
        &mut conn,
        &user_id,
        &body.swiped_id,
        body.direction,
        &body.mood_emoji,
        body.post_id,
    )
    .await?;

    let status = if outcome.duplicate {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((
        status,
        Json(json!({
            "swipe": outcome.swipe,
            "duplicate": outcome.duplicate,
            "matched": outcome.matched.is_some(),
            "match": outcome.matched
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_request_accepts_client_payload() {
        let body = r#"{"swipedId":"u2","direction":"right","moodEmoji":"🔥","postId":null}"#;
        let req: SwipeRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.swiped_id, "u2");
        assert_eq!(req.direction, SwipeDirection::Right);
        assert_eq!(req.mood_emoji, "🔥");
        assert!(req.post_id.is_none());
    }

    #[test]
    fn swipe_request_rejects_bad_direction() {
        let body = r#"{"swipedId":"u2","direction":"sideways","moodEmoji":"🔥"}"#;
        assert!(serde_json::from_str::<SwipeRequest>(body).is_err());
    }
}
