// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::MatchError;
use crate::models::mood_match::{MoodMatch, NewMoodMatch};
use crate::models::swipe::{NewSwipe, Swipe, SwipeDirection};
use crate::moods;
use crate::schema::{matches, swipes};

/// Canonical ordering of a user pair: lexicographic on the opaque IDs. Both
/// directions of match detection land on the same (low, high) key.
pub fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a < b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Result of recording a swipe. `duplicate` means the (swiper, swiped, mood)
/// tuple was already on record and nothing new was written.
#[derive(Debug)]
pub struct SwipeOutcome {
    pub swipe: Swipe,
    pub duplicate: bool,
    pub matched: Option<MoodMatch>,
}

/// Record one directional swipe. Idempotent per (swiper, swiped, mood): the
/// unique constraint makes the repeat call return the existing row with
/// `duplicate: true`, without re-running match detection. A fresh right-swipe
/// runs the detector synchronously so the caller learns about a match in the
/// same response.
pub async fn record_swipe(
    conn: &mut AsyncPgConnection,
    swiper_id: &str,
    swiped_id: &str,
    direction: SwipeDirection,
    mood_emoji: &str,
    post_id: Option<Uuid>,
) -> Result<SwipeOutcome, MatchError> {
    if swiper_id == swiped_id {
        return Err(MatchError::InvalidOperation(
            "cannot swipe on yourself".to_string(),
        ));
    }
    if !moods::is_known_mood(mood_emoji) {
        return Err(MatchError::InvalidMood(mood_emoji.to_string()));
    }

    let new_swipe = NewSwipe {
        swiper_id: swiper_id.to_string(),
        swiped_id: swiped_id.to_string(),
        post_id,
        direction: direction.as_str().to_string(),
        mood_emoji: mood_emoji.to_string(),
        created_at: Utc::now(),
    };

    let inserted: Option<Swipe> = diesel::insert_into(swipes::table)
        .values(&new_swipe)
        .on_conflict((swipes::swiper_id, swipes::swiped_id, swipes::mood_emoji))
        .do_nothing()
        .returning(Swipe::as_returning())
        .get_result(conn)
        .await
        .optional()?;

    match inserted {
        Some(swipe) => {
            let matched = if direction == SwipeDirection::Right {
                detect_and_create_match(conn, swiper_id, swiped_id, mood_emoji).await?
            } else {
                None
            };
            Ok(SwipeOutcome {
                swipe,
                duplicate: false,
                matched,
            })
        }
        None => {
            debug!(
                "Duplicate swipe from {} on {} for mood {}, returning existing record",
                swiper_id, swiped_id, mood_emoji
            );
            let existing = swipes::table
                .filter(swipes::swiper_id.eq(swiper_id))
                .filter(swipes::swiped_id.eq(swiped_id))
                .filter(swipes::mood_emoji.eq(mood_emoji))
                .first::<Swipe>(conn)
                .await?;
            Ok(SwipeOutcome {
                swipe: existing,
                duplicate: true,
                matched: None,
            })
        }
    }
}

/// Check for a reciprocal right-swipe and create the match if both sides have
/// accepted. The unique constraint on (user_id_low, user_id_high, mood_emoji)
/// makes creation race-safe: when both users' right-swipes are processed
/// concurrently only one insert wins, and the loser fetches the winner's row.
pub async fn detect_and_create_match(
    conn: &mut AsyncPgConnection,
    swiper_id: &str,
    swiped_id: &str,
    mood_emoji: &str,
) -> Result<Option<MoodMatch>, MatchError> {
    let reciprocal: Option<Swipe> = swipes::table
        .filter(swipes::swiper_id.eq(swiped_id))
        .filter(swipes::swiped_id.eq(swiper_id))
        .filter(swipes::mood_emoji.eq(mood_emoji))
        .filter(swipes::direction.eq(SwipeDirection::Right.as_str()))
        .first::<Swipe>(conn)
        .await
        .optional()?;

    if reciprocal.is_none() {
        return Ok(None);
    }

    let (user_id_low, user_id_high) = canonical_pair(swiper_id, swiped_id);

    let new_match = NewMoodMatch {
        user_id_low: user_id_low.clone(),
        user_id_high: user_id_high.clone(),
        mood_emoji: mood_emoji.to_string(),
        created_at: Utc::now(),
        is_active: true,
    };

    let created: Option<MoodMatch> = diesel::insert_into(matches::table)
        .values(&new_match)
        .on_conflict((
            matches::user_id_low,
            matches::user_id_high,
            matches::mood_emoji,
        ))
        .do_nothing()
        .returning(MoodMatch::as_returning())
        .get_result(conn)
        .await
        .optional()?;

    match created {
        Some(mood_match) => {
            info!(
                "Created match {} for pair ({}, {}) on mood {}",
                mood_match.id, user_id_low, user_id_high, mood_emoji
            );
            Ok(Some(mood_match))
        }
        None => {
            // Lost the creation race; the match already exists.
            let existing = matches::table
                .filter(matches::user_id_low.eq(&user_id_low))
                .filter(matches::user_id_high.eq(&user_id_high))
                .filter(matches::mood_emoji.eq(mood_emoji))
                .first::<MoodMatch>(conn)
                .await?;
            debug!(
                "Match for pair ({}, {}) on mood {} already existed as {}",
                user_id_low, user_id_high, mood_emoji, existing.id
            );
            Ok(Some(existing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair_orders_lexically() {
        assert_eq!(
            canonical_pair("u1", "u2"),
            ("u1".to_string(), "u2".to_string())
        );
        assert_eq!(
            canonical_pair("u2", "u1"),
            ("u1".to_string(), "u2".to_string())
        );
    }

    #[test]
    fn canonical_pair_is_direction_independent() {
        let ids = ["alpha", "beta", "0x9f", "0x10", "zed"];
        for a in ids {
            for b in ids {
                if a == b {
                    continue;
                }
                assert_eq!(canonical_pair(a, b), canonical_pair(b, a));
                let (low, high) = canonical_pair(a, b);
                assert!(low < high);
            }
        }
    }
}
