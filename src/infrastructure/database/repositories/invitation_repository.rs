//! SeaORM implementation of InvitationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::invitation::{reminder_cutoff, REMINDER_COOLDOWN_HOURS};
use crate::domain::{
    DomainError, DomainResult, InvitationRepository, InvitationStatus, ReminderNotification,
    WorkerInvitation,
};
use crate::infrastructure::database::entities::{notification, worker_invitation};

pub struct SeaOrmInvitationRepository {
    db: DatabaseConnection,
}

impl SeaOrmInvitationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

fn invitation_to_domain(m: worker_invitation::Model) -> DomainResult<WorkerInvitation> {
    let status = InvitationStatus::parse(&m.status).ok_or_else(|| {
        DomainError::Internal(format!(
            "Invitation {} has unknown status '{}'",
            m.id, m.status
        ))
    })?;

    Ok(WorkerInvitation {
        id: m.id,
        company_id: m.company_id,
        company_name: m.company_name,
        invited_email: m.invited_email,
        invited_user_id: m.invited_user_id,
        invited_by: m.invited_by,
        status,
        reminder_count: m.reminder_count,
        last_reminder_sent_at: m.last_reminder_sent_at,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

fn notification_to_domain(m: notification::Model) -> ReminderNotification {
    ReminderNotification {
        id: m.id,
        kind: m.kind,
        recipient_email: m.recipient_email,
        recipient_user_id: m.recipient_user_id,
        invitation_id: m.invitation_id.unwrap_or_default(),
        title: m.title,
        body: m.body,
        created_at: m.created_at,
    }
}

#[async_trait]
impl InvitationRepository for SeaOrmInvitationRepository {
    async fn save(&self, inv: WorkerInvitation) -> DomainResult<()> {
        let model = worker_invitation::ActiveModel {
            id: Set(inv.id),
            company_id: Set(inv.company_id),
            company_name: Set(inv.company_name),
            invited_email: Set(inv.invited_email),
            invited_user_id: Set(inv.invited_user_id),
            invited_by: Set(inv.invited_by),
            status: Set(inv.status.as_str().to_string()),
            reminder_count: Set(inv.reminder_count),
            last_reminder_sent_at: Set(inv.last_reminder_sent_at),
            created_at: Set(inv.created_at),
            updated_at: Set(inv.updated_at),
        };

        worker_invitation::Entity::insert(model)
            .on_conflict(
                OnConflict::column(worker_invitation::Column::Id)
                    .update_columns([
                        worker_invitation::Column::CompanyName,
                        worker_invitation::Column::InvitedUserId,
                        worker_invitation::Column::Status,
                        worker_invitation::Column::ReminderCount,
                        worker_invitation::Column::LastReminderSentAt,
                        worker_invitation::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<WorkerInvitation>> {
        let model = worker_invitation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(invitation_to_domain).transpose()
    }

    async fn record_reminder(
        &self,
        invitation_id: &str,
        sent_at: DateTime<Utc>,
        n: ReminderNotification,
    ) -> DomainResult<WorkerInvitation> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Status and cooldown are part of the update filter, so of two
        // concurrent reminders only one can claim the slot.
        let claimed = worker_invitation::Entity::update_many()
            .col_expr(
                worker_invitation::Column::ReminderCount,
                Expr::col(worker_invitation::Column::ReminderCount).add(1),
            )
            .col_expr(worker_invitation::Column::LastReminderSentAt, Expr::value(sent_at))
            .col_expr(worker_invitation::Column::UpdatedAt, Expr::value(sent_at))
            .filter(worker_invitation::Column::Id.eq(invitation_id))
            .filter(worker_invitation::Column::Status.eq(InvitationStatus::Pending.as_str()))
            .filter(
                Condition::any()
                    .add(worker_invitation::Column::LastReminderSentAt.is_null())
                    .add(worker_invitation::Column::LastReminderSentAt.lte(reminder_cutoff(sent_at))),
            )
            .exec(&txn)
            .await
            .map_err(db_err)?
            .rows_affected;

        if claimed == 0 {
            txn.rollback().await.map_err(db_err)?;
            debug!("Reminder for invitation {} not claimed", invitation_id);
            return Err(DomainError::FailedPrecondition(format!(
                "Invitation {} is not pending or was reminded in the last {} hours",
                invitation_id, REMINDER_COOLDOWN_HOURS
            )));
        }

        let notification = notification::ActiveModel {
            id: Set(n.id),
            kind: Set(n.kind),
            recipient_email: Set(n.recipient_email),
            recipient_user_id: Set(n.recipient_user_id),
            invitation_id: Set(Some(n.invitation_id)),
            title: Set(n.title),
            body: Set(n.body),
            read: Set(false),
            created_at: Set(n.created_at),
        };
        notification.insert(&txn).await.map_err(db_err)?;

        let stored = worker_invitation::Entity::find_by_id(invitation_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| {
                DomainError::Internal(format!("Invitation {} vanished mid-transaction", invitation_id))
            })?;

        txn.commit().await.map_err(db_err)?;

        info!(
            "Reminder #{} recorded for invitation {}",
            stored.reminder_count, invitation_id
        );
        invitation_to_domain(stored)
    }

    async fn find_notifications(&self, invitation_id: &str) -> DomainResult<Vec<ReminderNotification>> {
        let models = notification::Entity::find()
            .filter(notification::Column::InvitationId.eq(invitation_id))
            .order_by_asc(notification::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(notification_to_domain).collect())
    }
}
