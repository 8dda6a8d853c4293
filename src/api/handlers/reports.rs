// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::AuthenticatedUser;
use crate::db::DbPool;
use crate::error::MatchError;
use crate::matching::reports;

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub reason: String,
    pub description: Option<String>,
}

/// Record an abuse report against a message for downstream moderation.
pub async fn report_message(
    State(db_pool): State<DbPool>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(message_id): Path<Uuid>,
    Json(body): Json<ReportRequest>,
) -> Result<impl IntoResponse, MatchError> {
    let mut conn = db_pool.get().await?;

    let report = reports::report_message(
        &mut conn,
        &user_id,
        message_id,
        &body.reason,
        body.description.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "report": report
        })),
    ))
}
