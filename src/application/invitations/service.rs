//! Worker invitation reminders

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::application::access::{caller_company, require_role, Caller};
use crate::domain::invitation::REMINDER_COOLDOWN_HOURS;
use crate::domain::{
    DomainError, DomainResult, ReminderNotification, RepositoryProvider, UserRole,
};
use crate::shared::require_non_empty;

/// What a successful reminder reports back
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderReceipt {
    pub invitation_id: String,
    pub reminder_count: i32,
    pub sent_at: DateTime<Utc>,
    pub next_allowed_at: DateTime<Utc>,
}

pub struct InvitationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl InvitationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Re-notify the invitee of a pending invitation, at most once per cooldown.
    ///
    /// The invitation bookkeeping and the notification document are written
    /// as one batch. The status and cooldown checks are repeated inside
    /// that batch, so concurrent reminders cannot both go out.
    pub async fn send_reminder(
        &self,
        caller: &Caller,
        invitation_id: &str,
    ) -> DomainResult<ReminderReceipt> {
        let role = require_role(
            self.repos.as_ref(),
            caller,
            &[UserRole::Root, UserRole::Admin],
            "Only root or admin users can send invitation reminders",
        )
        .await?;

        let invitation_id = require_non_empty("invitation_id", invitation_id)?;
        let invitation = self
            .repos
            .invitations()
            .find_by_id(invitation_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "WorkerInvitation",
                field: "id",
                value: invitation_id.to_string(),
            })?;

        if role == UserRole::Admin {
            let company = caller_company(self.repos.as_ref(), caller).await?;
            if company.as_deref() != Some(invitation.company_id.as_str()) {
                return Err(DomainError::Forbidden(
                    "Invitation belongs to another company".into(),
                ));
            }
        }

        let now = Utc::now();
        invitation.ensure_reminder_allowed(now)?;

        let notification = ReminderNotification::for_invitation(&invitation, now);
        let invitation = self
            .repos
            .invitations()
            .record_reminder(&invitation.id, now, notification)
            .await?;

        metrics::counter!("invitation_reminders_sent_total").increment(1);
        info!(
            invitation_id = %invitation.id,
            reminder_count = invitation.reminder_count,
            sent_by = %caller.uid,
            "Invitation reminder sent"
        );

        let next_allowed_at = now + Duration::hours(REMINDER_COOLDOWN_HOURS);
        Ok(ReminderReceipt {
            invitation_id: invitation.id,
            reminder_count: invitation.reminder_count,
            sent_at: now,
            next_allowed_at,
        })
    }
}
