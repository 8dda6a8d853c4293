// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::message_reports;

/// Append-only abuse report against a chat message. `self_report` marks
/// reports where the reporter is the message's own sender; those are kept for
/// review rather than rejected. There is deliberately no foreign key to
/// chat_messages so reports survive the expiration reaper.
#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = message_reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct MessageReport {
    pub id: Uuid,
    pub reporter_id: String,
    pub message_id: Uuid,
    pub reason: String,
    pub description: Option<String>,
    pub self_report: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = message_reports)]
pub struct NewMessageReport {
    pub reporter_id: String,
    pub message_id: Uuid,
    pub reason: String,
    pub description: Option<String>,
    pub self_report: bool,
    pub created_at: DateTime<Utc>,
}
