// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::matches;

/// A mutual right-swipe between two users for a given mood. The pair is
/// stored in canonical order (user_id_low < user_id_high) so either direction
/// of detection lands on the same row.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct MoodMatch {
    pub id: Uuid,
    pub user_id_low: String,
    pub user_id_high: String,
    pub mood_emoji: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub last_message_at: Option<DateTime<Utc>>,
}

impl MoodMatch {
    /// Whether the given user is one of the two participants.
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.user_id_low == user_id || self.user_id_high == user_id
    }

    /// The other participant, if the given user is one of the pair.
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        if self.user_id_low == user_id {
            Some(&self.user_id_high)
        } else if self.user_id_high == user_id {
            Some(&self.user_id_low)
        } else {
            None
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = matches)]
pub struct NewMoodMatch {
    pub user_id_low: String,
    pub user_id_high: String,
    pub mood_emoji: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Match enriched with the counterpart's display data for the match list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    #[serde(flatten)]
    pub record: MoodMatch,
    pub partner_id: String,
    pub partner_nickname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MoodMatch {
        MoodMatch {
            id: Uuid::nil(),
            user_id_low: "u1".to_string(),
            user_id_high: "u2".to_string(),
            mood_emoji: "🔥".to_string(),
            created_at: Utc::now(),
            is_active: true,
            last_message_at: None,
        }
    }

    #[test]
    fn participant_checks() {
        let m = sample();
        assert!(m.has_participant("u1"));
        assert!(m.has_participant("u2"));
        assert!(!m.has_participant("u3"));
        assert_eq!(m.other_participant("u1"), Some("u2"));
        assert_eq!(m.other_participant("u2"), Some("u1"));
        assert_eq!(m.other_participant("u3"), None);
    }
}
