// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use thiserror::Error;
use tracing::error;

/// Errors produced by the matching core. Expected races (duplicate swipe,
/// concurrent match creation) are absorbed into success-shaped results before
/// they reach this type; `Conflict` only exists for the rare path where a
/// uniqueness violation cannot be resolved by re-fetch.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("caller identity is missing or invalid")]
    NotAuthenticated,

    #[error("unknown mood emoji: {0}")]
    InvalidMood(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl MatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MatchError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            MatchError::InvalidMood(_) | MatchError::InvalidOperation(_) => {
                StatusCode::BAD_REQUEST
            }
            MatchError::Forbidden(_) => StatusCode::FORBIDDEN,
            MatchError::NotFound(_) => StatusCode::NOT_FOUND,
            MatchError::Conflict(_) => StatusCode::CONFLICT,
            MatchError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            MatchError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::db::DbPoolError> for MatchError {
    fn from(e: crate::db::DbPoolError) -> Self {
        MatchError::Unavailable(e.to_string())
    }
}

impl IntoResponse for MatchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        (
            status,
            Json(serde_json::json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_error_kinds() {
        assert_eq!(
            MatchError::NotAuthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            MatchError::InvalidMood("🐟".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MatchError::InvalidOperation("self swipe".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MatchError::Forbidden("not a participant".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            MatchError::NotFound("match".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            MatchError::Unavailable("pool timeout".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
