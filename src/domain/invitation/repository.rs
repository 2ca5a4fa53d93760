//! Invitation repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{ReminderNotification, WorkerInvitation};
use crate::domain::DomainResult;

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    async fn save(&self, invitation: WorkerInvitation) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<WorkerInvitation>>;

    /// Bump the reminder counter and queue `notification` in one transaction.
    ///
    /// The invitation must still be pending and outside its cooldown at the
    /// moment of the write; otherwise nothing is written and
    /// `FailedPrecondition` is returned. Yields the invitation as stored.
    async fn record_reminder(
        &self,
        invitation_id: &str,
        sent_at: DateTime<Utc>,
        notification: ReminderNotification,
    ) -> DomainResult<WorkerInvitation>;

    async fn find_notifications(&self, invitation_id: &str) -> DomainResult<Vec<ReminderNotification>>;
}
