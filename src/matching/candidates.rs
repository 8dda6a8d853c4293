// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use crate::error::MatchError;
use crate::models::post::Candidate;
use crate::moods;
use crate::schema::{mood_posts, swipes, users};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Select swipeable candidates for a user and mood: users other than the
/// caller with a recent post tagged with the mood, minus anyone the caller
/// already swiped on for this mood in either direction. Each candidate
/// appears once, surfaced by their newest qualifying post. An empty list is
/// a normal result, not an error.
pub async fn get_candidates(
    conn: &mut AsyncPgConnection,
    user_id: &str,
    mood_emoji: &str,
    limit: i64,
) -> Result<Vec<Candidate>, MatchError> {
    if !moods::is_known_mood(mood_emoji) {
        return Err(MatchError::InvalidMood(mood_emoji.to_string()));
    }
    let limit = limit.clamp(1, MAX_LIMIT);

    let already_swiped = swipes::table
        .filter(swipes::swiper_id.eq(user_id))
        .filter(swipes::mood_emoji.eq(mood_emoji))
        .select(swipes::swiped_id);

    let rows = mood_posts::table
        .inner_join(users::table)
        .filter(mood_posts::mood_emoji.eq(mood_emoji))
        .filter(mood_posts::user_id.ne(user_id))
        .filter(mood_posts::user_id.ne_all(already_swiped))
        .select((
            mood_posts::user_id,
            mood_posts::id,
            users::nickname,
            mood_posts::mood_emoji,
            mood_posts::text,
            mood_posts::media_url,
            mood_posts::media_type,
            mood_posts::created_at,
        ))
        // DISTINCT ON forces user_id-first ordering, so the result is one row
        // per candidate user in ID order; the recency ordering and the cap
        // are applied afterwards in cap_newest_first. Capping here would
        // truncate by user ID instead of by newest post.
        .distinct_on(mood_posts::user_id)
        .order((mood_posts::user_id, mood_posts::created_at.desc()))
        .load::<(
            String,
            Uuid,
            Option<String>,
            String,
            Option<String>,
            Option<String>,
            Option<String>,
            DateTime<Utc>,
        )>(conn)
        .await?;

    let candidates: Vec<Candidate> = rows
        .into_iter()
        .map(
            |(candidate_id, post_id, nickname, mood, text, media_url, media_type, posted_at)| {
                Candidate {
                    candidate_user_id: candidate_id,
                    source_post_id: Some(post_id),
                    nickname,
                    mood_emoji: mood,
                    text,
                    media_url,
                    media_type,
                    posted_at,
                }
            },
        )
        .collect();

    let candidates = cap_newest_first(candidates, limit as usize);

    debug!(
        "Selected {} candidates for user {} and mood {}",
        candidates.len(),
        user_id,
        mood_emoji
    );

    Ok(candidates)
}

/// Newest posters first, then cap. The cap must follow the sort so that the
/// freshest candidates survive regardless of how their user IDs compare.
fn cap_newest_first(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    candidates.truncate(limit);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn candidate(user_id: &str, hours_ago: i64) -> Candidate {
        Candidate {
            candidate_user_id: user_id.to_string(),
            source_post_id: None,
            nickname: None,
            mood_emoji: "🔥".to_string(),
            text: None,
            media_url: None,
            media_type: None,
            posted_at: Utc::now() - Duration::hours(hours_ago),
        }
    }

    #[test_log::test]
    fn cap_keeps_newest_posters_not_smallest_ids() {
        // Input arrives ordered by user ID, the way DISTINCT ON returns it.
        let rows = vec![
            candidate("aaa", 30),
            candidate("bbb", 2),
            candidate("ccc", 20),
            candidate("zed", 1),
        ];

        let capped = cap_newest_first(rows, 2);

        let ids: Vec<&str> = capped
            .iter()
            .map(|c| c.candidate_user_id.as_str())
            .collect();
        // The freshest posters win even though their IDs sort last.
        assert_eq!(ids, vec!["zed", "bbb"]);
    }

    #[test_log::test]
    fn cap_orders_newest_first_when_under_limit() {
        let rows = vec![candidate("aaa", 5), candidate("bbb", 1)];

        let capped = cap_newest_first(rows, 20);

        let ids: Vec<&str> = capped
            .iter()
            .map(|c| c.candidate_user_id.as_str())
            .collect();
        assert_eq!(ids, vec!["bbb", "aaa"]);
    }
}
