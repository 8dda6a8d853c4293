// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use std::collections::HashMap;

use crate::error::MatchError;
use crate::models::mood_match::{MatchDetail, MoodMatch};
use crate::schema::{matches, users};

/// List the caller's active matches, newest first, with the counterpart's
/// nickname for display.
pub async fn list_matches(
    conn: &mut AsyncPgConnection,
    user_id: &str,
) -> Result<Vec<MatchDetail>, MatchError> {
    let rows: Vec<MoodMatch> = matches::table
        .filter(matches::is_active.eq(true))
        .filter(
            matches::user_id_low
                .eq(user_id)
                .or(matches::user_id_high.eq(user_id)),
        )
        .order(matches::created_at.desc())
        .load(conn)
        .await?;

    let partner_ids: Vec<String> = rows
        .iter()
        .filter_map(|m| m.other_participant(user_id).map(str::to_string))
        .collect();

    let nicknames: HashMap<String, Option<String>> = users::table
        .filter(users::id.eq_any(&partner_ids))
        .select((users::id, users::nickname))
        .load::<(String, Option<String>)>(conn)
        .await?
        .into_iter()
        .collect();

    Ok(rows
        .into_iter()
        .filter_map(|record| {
            let partner_id = record.other_participant(user_id)?.to_string();
            let partner_nickname = nicknames.get(&partner_id).cloned().flatten();
            Some(MatchDetail {
                record,
                partner_id,
                partner_nickname,
            })
        })
        .collect())
}

/// Fetch one match, failing with NotFound when it does not exist.
pub async fn get_match(
    conn: &mut AsyncPgConnection,
    match_id: uuid::Uuid,
) -> Result<MoodMatch, MatchError> {
    matches::table
        .find(match_id)
        .first::<MoodMatch>(conn)
        .await
        .optional()?
        .ok_or_else(|| MatchError::NotFound(format!("match {} not found", match_id)))
}
