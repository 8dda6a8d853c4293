// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::MatchError;
use crate::matching::candidates::{self, DEFAULT_LIMIT};

#[derive(Debug, Deserialize)]
pub struct CandidatesQuery {
    pub mood: String,
    pub limit: Option<i64>,
}

/// Get swipeable candidates for the caller and the given mood.
pub async fn get_candidates(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Query(query): Query<CandidatesQuery>,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let candidates = candidates::get_candidates(&mut conn, &user_id, &query.mood, limit).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "candidates": candidates
        })),
    ))
}
