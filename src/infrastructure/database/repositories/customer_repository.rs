//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

fn model_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        company_id: m.company_id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        address: m.address,
        linked_user_id: m.linked_user_id,
        linked_at: m.linked_at,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn save(&self, c: Customer) -> DomainResult<()> {
        let model = customer::ActiveModel {
            id: Set(c.id),
            company_id: Set(c.company_id),
            name: Set(c.name),
            email: Set(c.email),
            phone: Set(c.phone),
            address: Set(c.address),
            linked_user_id: Set(c.linked_user_id),
            linked_at: Set(c.linked_at),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
        };

        customer::Entity::insert(model)
            .on_conflict(
                OnConflict::column(customer::Column::Id)
                    .update_columns([
                        customer::Column::CompanyId,
                        customer::Column::Name,
                        customer::Column::Email,
                        customer::Column::Phone,
                        customer::Column::Address,
                        customer::Column::LinkedUserId,
                        customer::Column::LinkedAt,
                        customer::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find()
            .filter(customer::Column::Email.eq(email))
            .order_by_asc(customer::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_connection;

    #[tokio::test]
    async fn save_then_find_by_email() {
        let repo = SeaOrmCustomerRepository::new(test_connection().await);

        let mut c = Customer::new(Some("co-1".into()), "Villa Azul", Some("Owner@Mail.com"));
        repo.save(c.clone()).await.unwrap();

        c.phone = Some("555-0100".into());
        repo.save(c.clone()).await.unwrap();

        let found = repo.find_by_email("owner@mail.com").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phone.as_deref(), Some("555-0100"));
        assert!(repo.find_by_email("nobody@mail.com").await.unwrap().is_empty());
    }
}
