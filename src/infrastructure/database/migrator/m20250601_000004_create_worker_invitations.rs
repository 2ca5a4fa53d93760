//! Create worker_invitations and notifications tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkerInvitations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkerInvitations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkerInvitations::CompanyId).string().not_null())
                    .col(ColumnDef::new(WorkerInvitations::CompanyName).string())
                    .col(
                        ColumnDef::new(WorkerInvitations::InvitedEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkerInvitations::InvitedUserId).string())
                    .col(ColumnDef::new(WorkerInvitations::InvitedBy).string().not_null())
                    .col(
                        ColumnDef::new(WorkerInvitations::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(WorkerInvitations::ReminderCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WorkerInvitations::LastReminderSentAt)
                            .timestamp_with_time_zone(),
                    )
                    .col(
                        ColumnDef::new(WorkerInvitations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkerInvitations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Kind).string().not_null())
                    .col(ColumnDef::new(Notifications::RecipientEmail).string().not_null())
                    .col(ColumnDef::new(Notifications::RecipientUserId).string())
                    .col(ColumnDef::new(Notifications::InvitationId).string())
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Body).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::Read)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_invitation")
                    .table(Notifications::Table)
                    .col(Notifications::InvitationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WorkerInvitations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkerInvitations {
    Table,
    Id,
    CompanyId,
    CompanyName,
    InvitedEmail,
    InvitedUserId,
    InvitedBy,
    Status,
    ReminderCount,
    LastReminderSentAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Notifications {
    Table,
    Id,
    Kind,
    RecipientEmail,
    RecipientUserId,
    InvitationId,
    Title,
    Body,
    Read,
    CreatedAt,
}
