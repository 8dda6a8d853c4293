// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::swipes;

/// Directional swipe decision. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Immutable record of one user's decision about another, scoped to a mood
/// round. Never updated or deleted by normal operation.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = swipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Swipe {
    pub id: Uuid,
    pub swiper_id: String,
    pub swiped_id: String,
    pub post_id: Option<Uuid>,
    pub direction: String,
    pub mood_emoji: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = swipes)]
pub struct NewSwipe {
    pub swiper_id: String,
    pub swiped_id: String,
    pub post_id: Option<Uuid>,
    pub direction: String,
    pub mood_emoji: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SwipeDirection::Right).unwrap(),
            "\"right\""
        );
        let parsed: SwipeDirection = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(parsed, SwipeDirection::Left);
    }

    #[test]
    fn direction_rejects_unknown_values() {
        assert!(serde_json::from_str::<SwipeDirection>("\"up\"").is_err());
    }
}
