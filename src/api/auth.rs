// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::MatchError;

/// Header carrying the stable user ID resolved by the upstream identity
/// gateway. The service trusts this claim as given and never validates
/// credentials itself.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the authenticated caller. Rejects with NotAuthenticated
/// (401) when the identity header is missing or empty.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = MatchError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| AuthenticatedUser(value.to_string()))
            .ok_or(MatchError::NotAuthenticated)
    }
}
