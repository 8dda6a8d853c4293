// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::MatchError;
use crate::matching::matches;

/// List the caller's active matches, newest first.
pub async fn get_matches(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let matches = matches::list_matches(&mut conn, &user_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "matches": matches
        })),
    ))
}
