// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

use chrono::Utc;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::MatchError;
use crate::models::message::ChatMessage;
use crate::models::report::{MessageReport, NewMessageReport};
use crate::schema::{chat_messages, message_reports};

/// Record an abuse report against a message. The message must still exist in
/// the store; expired-but-unpurged messages are reportable. Repeat reports
/// from the same reporter are each recorded. Self-reports are accepted but
/// flagged for moderator review.
pub async fn report_message(
    conn: &mut AsyncPgConnection,
    reporter_id: &str,
    message_id: Uuid,
    reason: &str,
    description: Option<&str>,
) -> Result<MessageReport, MatchError> {
    if reason.trim().is_empty() {
        return Err(MatchError::InvalidOperation(
            "report reason must not be empty".to_string(),
        ));
    }

    let message: ChatMessage = chat_messages::table
        .find(message_id)
        .first(conn)
        .await
        .optional()?
        .ok_or_else(|| MatchError::NotFound(format!("message {} not found", message_id)))?;

    let self_report = message.sender_id == reporter_id;
    if self_report {
        warn!(
            "User {} reported their own message {}, flagging for review",
            reporter_id, message_id
        );
    }

    let new_report = NewMessageReport {
        reporter_id: reporter_id.to_string(),
        message_id,
        reason: reason.to_string(),
        description: description.map(str::to_string),
        self_report,
        created_at: Utc::now(),
    };

    let report: MessageReport = diesel::insert_into(message_reports::table)
        .values(&new_report)
        .returning(MessageReport::as_returning())
        .get_result(conn)
        .await?;

    info!("Recorded report {} against message {}", report.id, message_id);

    Ok(report)
}
