//! Invitation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::invitations::ReminderReceipt;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReminderReceiptDto {
    pub invitation_id: String,
    pub reminder_count: i32,
    pub sent_at: DateTime<Utc>,
    /// Earliest time the next reminder is accepted
    pub next_allowed_at: DateTime<Utc>,
}

impl From<ReminderReceipt> for ReminderReceiptDto {
    fn from(r: ReminderReceipt) -> Self {
        Self {
            invitation_id: r.invitation_id,
            reminder_count: r.reminder_count,
            sent_at: r.sent_at,
            next_allowed_at: r.next_allowed_at,
        }
    }
}
