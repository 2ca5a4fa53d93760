//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::{DomainError, DomainResult, GetUserDto, User, UserRepository, UserRole};
use crate::infrastructure::database::entities::{customer, user};
use crate::shared::{validate_pagination, PaginatedResult};

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

pub(super) fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Root => UserRole::Root,
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Worker => UserRole::Worker,
        user::UserRole::Customer => UserRole::Customer,
    }
}

pub(super) fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Root => user::UserRole::Root,
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Worker => user::UserRole::Worker,
        UserRole::Customer => user::UserRole::Customer,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        uid: model.uid,
        email: model.email,
        display_name: model.display_name,
        photo_url: model.photo_url,
        email_verified: model.email_verified,
        role: entity_role_to_domain(model.role),
        company_id: model.company_id,
        company_name: model.company_name,
        name: model.name,
        pending_company_request: model.pending_company_request,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn find_by_uid(&self, uid: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(uid)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn list(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<User>> {
        let (page, page_size) = validate_pagination(dto.page, dto.page_size);

        let mut query = user::Entity::find();

        if let Some(search) = dto.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                user::Column::Email
                    .contains(search)
                    .or(user::Column::Name.contains(search)),
            );
        }

        if let Some(role) = dto.role {
            query = query.filter(user::Column::Role.eq(domain_role_to_entity(role)));
        }

        query = match dto.sort_by.as_deref() {
            Some("email") => query.order_by_asc(user::Column::Email),
            Some("name") => query.order_by_asc(user::Column::Name),
            Some("role") => query.order_by_asc(user::Column::Role),
            _ => query.order_by_desc(user::Column::CreatedAt),
        };

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = u64::from(page - 1) * u64::from(page_size);
        let models = query
            .offset(offset)
            .limit(u64::from(page_size))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<User> = models.into_iter().map(user_model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn create_with_customer_links(&self, user: User) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let uid = user.uid.clone();
        let email = user.email.clone();
        let now = user.created_at;

        let model = user::ActiveModel {
            uid: Set(user.uid),
            email: Set(user.email),
            display_name: Set(user.display_name),
            photo_url: Set(user.photo_url),
            email_verified: Set(user.email_verified),
            role: Set(domain_role_to_entity(user.role)),
            company_id: Set(user.company_id),
            company_name: Set(user.company_name),
            name: Set(user.name),
            pending_company_request: Set(user.pending_company_request),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };
        model.insert(&txn).await.map_err(db_err)?;

        let linked = match email {
            Some(email) => {
                customer::Entity::update_many()
                    .col_expr(customer::Column::LinkedUserId, Expr::value(uid.clone()))
                    .col_expr(customer::Column::LinkedAt, Expr::value(now))
                    .col_expr(customer::Column::UpdatedAt, Expr::value(now))
                    .filter(customer::Column::Email.eq(email))
                    .filter(customer::Column::LinkedUserId.is_null())
                    .exec(&txn)
                    .await
                    .map_err(db_err)?
                    .rows_affected
            }
            None => 0,
        };

        txn.commit().await.map_err(db_err)?;

        info!("User document created: {} ({} customers linked)", uid, linked);
        Ok(linked)
    }

    async fn update_role(&self, uid: &str, role: UserRole, now: DateTime<Utc>) -> DomainResult<()> {
        let existing = user::Entity::find_by_id(uid)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "uid",
                value: uid.to_string(),
            });
        };

        let mut active: user::ActiveModel = existing.into();
        active.role = Set(domain_role_to_entity(role));
        active.updated_at = Set(now);
        active.update(&self.db).await.map_err(db_err)?;

        debug!("User {} role set to {}", uid, role);
        Ok(())
    }
}
