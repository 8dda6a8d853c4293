// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

// Import diesel table macros
use diesel::allow_tables_to_appear_in_same_query;
use diesel::joinable;
use diesel::table;

// Read-only view into the external users table, used for candidate and match
// enrichment only.
table! {
    users (id) {
        id -> Varchar,
        nickname -> Nullable<Varchar>,
        is_anonymous -> Bool,
        created_at -> Timestamptz,
    }
}

// Read-only view into the external mood post feed.
table! {
    mood_posts (id) {
        id -> Uuid,
        user_id -> Varchar,
        mood_emoji -> Varchar,
        text -> Nullable<Text>,
        media_url -> Nullable<Varchar>,
        media_type -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

table! {
    swipes (id) {
        id -> Uuid,
        swiper_id -> Varchar,
        swiped_id -> Varchar,
        post_id -> Nullable<Uuid>,
        direction -> Varchar,
        mood_emoji -> Varchar,
        created_at -> Timestamptz,
    }
}

table! {
    matches (id) {
        id -> Uuid,
        user_id_low -> Varchar,
        user_id_high -> Varchar,
        mood_emoji -> Varchar,
        created_at -> Timestamptz,
        is_active -> Bool,
        last_message_at -> Nullable<Timestamptz>,
    }
}

table! {
    chat_messages (id) {
        id -> Uuid,
        match_id -> Uuid,
        sender_id -> Varchar,
        message_type -> Varchar,
        content -> Text,
        mood_emoji -> Nullable<Varchar>,
        created_at -> Timestamptz,
        expires_at -> Timestamptz,
        is_read -> Bool,
    }
}

table! {
    message_reports (id) {
        id -> Uuid,
        reporter_id -> Varchar,
        message_id -> Uuid,
        reason -> Varchar,
        description -> Nullable<Text>,
        self_report -> Bool,
        created_at -> Timestamptz,
    }
}

joinable!(mood_posts -> users (user_id));
joinable!(chat_messages -> matches (match_id));

allow_tables_to_appear_in_same_query!(
    users,
    mood_posts,
    swipes,
    matches,
    chat_messages,
    message_reports,
);
