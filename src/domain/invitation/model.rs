//! Worker invitation domain entity

use chrono::{DateTime, Duration, Utc};

use crate::domain::DomainError;

/// Minimum time between two reminders for the same invitation
pub const REMINDER_COOLDOWN_HOURS: i64 = 24;

pub const REMINDER_NOTIFICATION_KIND: &str = "worker_invitation_reminder";

/// Latest previous reminder that still lets a new one go out at `now`.
pub fn reminder_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(REMINDER_COOLDOWN_HOURS)
}

/// Invitation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationStatus {
    /// Waiting for the invitee to answer
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl InvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invitation for a user to join a company as a worker
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerInvitation {
    pub id: String,
    pub company_id: String,
    pub company_name: Option<String>,
    pub invited_email: String,
    pub invited_user_id: Option<String>,
    pub invited_by: String,
    pub status: InvitationStatus,
    pub reminder_count: i32,
    pub last_reminder_sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkerInvitation {
    pub fn new(
        company_id: impl Into<String>,
        invited_email: &str,
        invited_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            company_id: company_id.into(),
            company_name: None,
            invited_email: crate::shared::normalize_email(invited_email),
            invited_user_id: None,
            invited_by: invited_by.into(),
            status: InvitationStatus::Pending,
            reminder_count: 0,
            last_reminder_sent_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Earliest moment the next reminder may go out; `None` if never reminded.
    pub fn next_reminder_at(&self) -> Option<DateTime<Utc>> {
        self.last_reminder_sent_at
            .map(|sent| sent + Duration::hours(REMINDER_COOLDOWN_HOURS))
    }

    pub fn ensure_reminder_allowed(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.status != InvitationStatus::Pending {
            return Err(DomainError::FailedPrecondition(format!(
                "Invitation is {}, reminders are only sent for pending invitations",
                self.status
            )));
        }

        match self.next_reminder_at() {
            Some(next) if now < next => Err(DomainError::FailedPrecondition(format!(
                "A reminder was already sent in the last {} hours; next reminder allowed at {}",
                REMINDER_COOLDOWN_HOURS,
                next.to_rfc3339()
            ))),
            _ => Ok(()),
        }
    }

    pub fn record_reminder(&mut self, now: DateTime<Utc>) {
        self.reminder_count += 1;
        self.last_reminder_sent_at = Some(now);
        self.updated_at = now;
    }
}

/// Notification document queued for delivery to the invitee
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderNotification {
    pub id: String,
    pub kind: String,
    pub recipient_email: String,
    pub recipient_user_id: Option<String>,
    pub invitation_id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ReminderNotification {
    pub fn for_invitation(invitation: &WorkerInvitation, now: DateTime<Utc>) -> Self {
        let company = invitation
            .company_name
            .as_deref()
            .unwrap_or("your company");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: REMINDER_NOTIFICATION_KIND.to_string(),
            recipient_email: invitation.invited_email.clone(),
            recipient_user_id: invitation.invited_user_id.clone(),
            invitation_id: invitation.id.clone(),
            title: "Pending worker invitation".to_string(),
            body: format!(
                "You have a pending invitation to join {} as a worker.",
                company
            ),
            created_at: now,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
