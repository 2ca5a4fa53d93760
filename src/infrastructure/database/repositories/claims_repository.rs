//! SeaORM implementation of IdentityClaimsRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use super::user_repository::{domain_role_to_entity, entity_role_to_domain};
use crate::domain::{DomainError, DomainResult, IdentityClaimsRepository, UserRole};
use crate::infrastructure::database::entities::identity_claim;

pub struct SeaOrmIdentityClaimsRepository {
    db: DatabaseConnection,
}

impl SeaOrmIdentityClaimsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl IdentityClaimsRepository for SeaOrmIdentityClaimsRepository {
    async fn get_role(&self, uid: &str) -> DomainResult<Option<UserRole>> {
        let model = identity_claim::Entity::find_by_id(uid)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(|m| entity_role_to_domain(m.role)))
    }

    async fn set_role(&self, uid: &str, role: UserRole) -> DomainResult<()> {
        let model = identity_claim::ActiveModel {
            uid: Set(uid.to_string()),
            role: Set(domain_role_to_entity(role)),
            updated_at: Set(Utc::now()),
        };

        identity_claim::Entity::insert(model)
            .on_conflict(
                OnConflict::column(identity_claim::Column::Uid)
                    .update_columns([
                        identity_claim::Column::Role,
                        identity_claim::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        debug!("Custom claims for {} set to role={}", uid, role);
        Ok(())
    }
}
