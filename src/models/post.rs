// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of an external mood post; the matching core never writes
/// this table.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::mood_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct MoodPost {
    pub id: Uuid,
    pub user_id: String,
    pub mood_emoji: String,
    pub text: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One swipeable candidate: a user sharing the caller's mood, with the post
/// that surfaced them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub candidate_user_id: String,
    pub source_post_id: Option<Uuid>,
    pub nickname: Option<String>,
    pub mood_emoji: String,
    pub text: Option<String>,
    pub media_url: Option<String>,
    pub media_type: Option<String>,
    pub posted_at: DateTime<Utc>,
}
