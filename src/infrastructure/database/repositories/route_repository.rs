//! SeaORM implementation of RouteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use crate::domain::{
    Assignment, AssignmentStatus, DomainError, DomainResult, ExpiryOutcome, Route,
    RouteRepository, RouteStatus,
};
use crate::infrastructure::database::entities::{assignment, route};

pub struct SeaOrmRouteRepository {
    db: DatabaseConnection,
}

impl SeaOrmRouteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn route_status_to_entity(s: RouteStatus) -> route::RouteStatus {
    match s {
        RouteStatus::Active => route::RouteStatus::Active,
        RouteStatus::Closed => route::RouteStatus::Closed,
    }
}

fn route_status_to_domain(s: route::RouteStatus) -> RouteStatus {
    match s {
        route::RouteStatus::Active => RouteStatus::Active,
        route::RouteStatus::Closed => RouteStatus::Closed,
    }
}

fn assignment_status_to_entity(s: AssignmentStatus) -> assignment::AssignmentStatus {
    match s {
        AssignmentStatus::Active => assignment::AssignmentStatus::Active,
        AssignmentStatus::Expired => assignment::AssignmentStatus::Expired,
    }
}

fn assignment_status_to_domain(s: assignment::AssignmentStatus) -> AssignmentStatus {
    match s {
        assignment::AssignmentStatus::Active => AssignmentStatus::Active,
        assignment::AssignmentStatus::Expired => AssignmentStatus::Expired,
    }
}

fn route_to_domain(m: route::Model) -> Route {
    Route {
        id: m.id,
        company_id: m.company_id,
        name: m.name,
        worker_id: m.worker_id,
        status: route_status_to_domain(m.status),
        created_at: m.created_at,
        updated_at: m.updated_at,
        closed_at: m.closed_at,
    }
}

fn assignment_to_domain(m: assignment::Model) -> Assignment {
    Assignment {
        id: m.id,
        route_id: m.route_id,
        worker_id: m.worker_id,
        customer_id: m.customer_id,
        status: assignment_status_to_domain(m.status),
        created_at: m.created_at,
        updated_at: m.updated_at,
        expired_at: m.expired_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl RouteRepository for SeaOrmRouteRepository {
    async fn save(&self, r: Route) -> DomainResult<()> {
        let model = route::ActiveModel {
            id: Set(r.id),
            company_id: Set(r.company_id),
            name: Set(r.name),
            worker_id: Set(r.worker_id),
            status: Set(route_status_to_entity(r.status)),
            created_at: Set(r.created_at),
            updated_at: Set(r.updated_at),
            closed_at: Set(r.closed_at),
        };

        route::Entity::insert(model)
            .on_conflict(
                OnConflict::column(route::Column::Id)
                    .update_columns([
                        route::Column::CompanyId,
                        route::Column::Name,
                        route::Column::WorkerId,
                        route::Column::Status,
                        route::Column::UpdatedAt,
                        route::Column::ClosedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn save_assignment(&self, a: Assignment) -> DomainResult<()> {
        let model = assignment::ActiveModel {
            id: Set(a.id),
            route_id: Set(a.route_id),
            worker_id: Set(a.worker_id),
            customer_id: Set(a.customer_id),
            status: Set(assignment_status_to_entity(a.status)),
            created_at: Set(a.created_at),
            updated_at: Set(a.updated_at),
            expired_at: Set(a.expired_at),
        };

        assignment::Entity::insert(model)
            .on_conflict(
                OnConflict::column(assignment::Column::Id)
                    .update_columns([
                        assignment::Column::WorkerId,
                        assignment::Column::CustomerId,
                        assignment::Column::Status,
                        assignment::Column::UpdatedAt,
                        assignment::Column::ExpiredAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Route>> {
        let model = route::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(route_to_domain))
    }

    async fn find_assignments(&self, route_id: &str) -> DomainResult<Vec<Assignment>> {
        let models = assignment::Entity::find()
            .filter(assignment::Column::RouteId.eq(route_id))
            .order_by_asc(assignment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(assignment_to_domain).collect())
    }

    async fn find_stale(&self, cutoff: DateTime<Utc>) -> DomainResult<Vec<Route>> {
        let models = route::Entity::find()
            .filter(route::Column::Status.eq(route::RouteStatus::Active))
            .filter(route::Column::CreatedAt.lt(cutoff))
            .order_by_asc(route::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        debug!("Found {} stale routes (cutoff {})", models.len(), cutoff);
        Ok(models.into_iter().map(route_to_domain).collect())
    }

    async fn expire_routes(
        &self,
        route_ids: &[String],
        now: DateTime<Utc>,
    ) -> DomainResult<ExpiryOutcome> {
        if route_ids.is_empty() {
            return Ok(ExpiryOutcome::default());
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        // Re-check status inside the transaction; a route may have closed since it was read.
        let active_ids: Vec<String> = route::Entity::find()
            .select_only()
            .column(route::Column::Id)
            .filter(route::Column::Id.is_in(route_ids.iter().cloned()))
            .filter(route::Column::Status.eq(route::RouteStatus::Active))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(db_err)?;

        if active_ids.is_empty() {
            txn.rollback().await.map_err(db_err)?;
            return Ok(ExpiryOutcome::default());
        }

        let routes_closed = route::Entity::update_many()
            .col_expr(route::Column::Status, Expr::value(route::RouteStatus::Closed))
            .col_expr(route::Column::ClosedAt, Expr::value(now))
            .col_expr(route::Column::UpdatedAt, Expr::value(now))
            .filter(route::Column::Id.is_in(active_ids.iter().cloned()))
            .filter(route::Column::Status.eq(route::RouteStatus::Active))
            .exec(&txn)
            .await
            .map_err(db_err)?
            .rows_affected;

        let assignments_expired = assignment::Entity::update_many()
            .col_expr(
                assignment::Column::Status,
                Expr::value(assignment::AssignmentStatus::Expired),
            )
            .col_expr(assignment::Column::ExpiredAt, Expr::value(now))
            .col_expr(assignment::Column::UpdatedAt, Expr::value(now))
            .filter(assignment::Column::RouteId.is_in(active_ids.iter().cloned()))
            .filter(assignment::Column::Status.eq(assignment::AssignmentStatus::Active))
            .exec(&txn)
            .await
            .map_err(db_err)?
            .rows_affected;

        txn.commit().await.map_err(db_err)?;

        info!(
            "Expired {} routes and {} assignments",
            routes_closed, assignments_expired
        );

        Ok(ExpiryOutcome {
            route_ids: active_ids,
            routes_closed,
            assignments_expired,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::infrastructure::database::test_connection;

    async fn seed(repo: &SeaOrmRouteRepository, hours_ago: i64, assignments: usize) -> Route {
        let mut r = Route::new(Some("co-1".into()), "North loop", Some("w-1".into()));
        r.created_at = Utc::now() - Duration::hours(hours_ago);
        repo.save(r.clone()).await.unwrap();
        for _ in 0..assignments {
            repo.save_assignment(Assignment::new(r.id.clone(), Some("w-1".into()), None))
                .await
                .unwrap();
        }
        r
    }

    #[tokio::test]
    async fn find_stale_only_returns_old_active_routes() {
        let repo = SeaOrmRouteRepository::new(test_connection().await);
        let old = seed(&repo, 30, 0).await;
        seed(&repo, 2, 0).await;
        let mut closed = seed(&repo, 40, 0).await;
        closed.close(Utc::now());
        repo.save(closed).await.unwrap();

        let stale = repo.find_stale(Utc::now() - Duration::hours(24)).await.unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].id, old.id);
    }

    #[tokio::test]
    async fn expire_closes_route_and_its_active_assignments() {
        let repo = SeaOrmRouteRepository::new(test_connection().await);
        let r = seed(&repo, 30, 2).await;
        let untouched = seed(&repo, 30, 1).await;

        let mut done = Assignment::new(r.id.clone(), None, None);
        done.status = AssignmentStatus::Expired;
        repo.save_assignment(done).await.unwrap();

        let now = Utc::now();
        let outcome = repo.expire_routes(&[r.id.clone()], now).await.unwrap();
        assert_eq!(outcome.routes_closed, 1);
        assert_eq!(outcome.assignments_expired, 2);
        assert_eq!(outcome.route_ids, vec![r.id.clone()]);

        let stored = repo.find_by_id(&r.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RouteStatus::Closed);
        assert!(stored.closed_at.is_some());

        let assignments = repo.find_assignments(&r.id).await.unwrap();
        assert_eq!(assignments.len(), 3);
        assert!(assignments.iter().all(|a| a.status == AssignmentStatus::Expired));

        let other = repo.find_assignments(&untouched.id).await.unwrap();
        assert!(other.iter().all(|a| a.status == AssignmentStatus::Active));
    }

    #[tokio::test]
    async fn expiring_closed_route_is_a_no_op() {
        let repo = SeaOrmRouteRepository::new(test_connection().await);
        let r = seed(&repo, 30, 1).await;

        repo.expire_routes(&[r.id.clone()], Utc::now()).await.unwrap();
        let again = repo.expire_routes(&[r.id.clone()], Utc::now()).await.unwrap();
        assert!(again.is_empty());
        assert!(again.route_ids.is_empty());

        let none = repo.expire_routes(&[], Utc::now()).await.unwrap();
        assert!(none.is_empty());
    }
}
