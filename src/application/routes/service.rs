//! Route expiration use-cases

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::application::access::{caller_company, require_role, require_root, Caller};
use crate::domain::{
    Assignment, DomainError, DomainResult, ExpiryOutcome, RepositoryProvider, Route, UserRole,
};
use crate::shared::require_non_empty;

/// Default age after which an active route is closed
pub const DEFAULT_ROUTE_MAX_AGE_HOURS: i64 = 24;

/// Route with its assignments
#[derive(Debug, Clone)]
pub struct RouteDetails {
    pub route: Route,
    pub assignments: Vec<Assignment>,
}

pub struct RouteService {
    repos: Arc<dyn RepositoryProvider>,
    max_age: Duration,
}

impl RouteService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, max_age_hours: i64) -> Self {
        Self {
            repos,
            max_age: Duration::hours(max_age_hours),
        }
    }

    /// Close every active route older than the configured age together with
    /// its active assignments, as one batch.
    pub async fn expire_stale_routes(&self) -> DomainResult<ExpiryOutcome> {
        let now = Utc::now();
        let stale = self.repos.routes().find_stale(now - self.max_age).await?;

        if stale.is_empty() {
            debug!("No stale routes");
            return Ok(ExpiryOutcome::default());
        }

        let ids: Vec<String> = stale.into_iter().map(|r| r.id).collect();
        let outcome = self.repos.routes().expire_routes(&ids, now).await?;
        record_expiry(&outcome);

        info!(
            routes_closed = outcome.routes_closed,
            assignments_expired = outcome.assignments_expired,
            "Stale routes expired"
        );
        Ok(outcome)
    }

    /// Stale sweep requested by a user rather than the scheduler
    pub async fn expire_stale_routes_as(&self, caller: &Caller) -> DomainResult<ExpiryOutcome> {
        require_root(self.repos.as_ref(), caller, "Only root users can expire routes").await?;
        self.expire_stale_routes().await
    }

    /// Close one route now, regardless of its age.
    pub async fn expire_route(&self, caller: &Caller, route_id: &str) -> DomainResult<ExpiryOutcome> {
        require_root(self.repos.as_ref(), caller, "Only root users can expire routes").await?;

        let route_id = require_non_empty("route_id", route_id)?;
        let route = self.find_route(route_id).await?;

        if !route.is_active() {
            return Err(DomainError::FailedPrecondition(format!(
                "Route {} is already {}",
                route.id, route.status
            )));
        }

        let outcome = self
            .repos
            .routes()
            .expire_routes(&[route.id.clone()], Utc::now())
            .await?;

        // Closed by a concurrent sweep between the read and the batch.
        if outcome.routes_closed == 0 {
            return Err(DomainError::FailedPrecondition(format!(
                "Route {} is already CLOSED",
                route.id
            )));
        }

        record_expiry(&outcome);
        info!(
            route_id = %route.id,
            assignments_expired = outcome.assignments_expired,
            expired_by = %caller.uid,
            "Route expired"
        );
        Ok(outcome)
    }

    /// Root sees every route; an admin only routes of their own company.
    pub async fn get_route(&self, caller: &Caller, route_id: &str) -> DomainResult<RouteDetails> {
        let role = require_role(
            self.repos.as_ref(),
            caller,
            &[UserRole::Root, UserRole::Admin],
            "Only root or admin users can view routes",
        )
        .await?;

        let route_id = require_non_empty("route_id", route_id)?;
        let route = self.find_route(route_id).await?;

        if role == UserRole::Admin {
            let company = caller_company(self.repos.as_ref(), caller).await?;
            if company.is_none() || company != route.company_id {
                return Err(DomainError::Forbidden(
                    "Route belongs to another company".into(),
                ));
            }
        }

        let assignments = self.repos.routes().find_assignments(&route.id).await?;
        Ok(RouteDetails { route, assignments })
    }

    async fn find_route(&self, route_id: &str) -> DomainResult<Route> {
        self.repos
            .routes()
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Route",
                field: "id",
                value: route_id.to_string(),
            })
    }
}

fn record_expiry(outcome: &ExpiryOutcome) {
    metrics::counter!("routes_expired_total").increment(outcome.routes_closed);
    metrics::counter!("assignments_expired_total").increment(outcome.assignments_expired);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing;
    use crate::domain::{AssignmentStatus, RouteStatus};

    async fn seed_route(
        repos: &dyn RepositoryProvider,
        company: &str,
        hours_ago: i64,
        assignments: usize,
    ) -> Route {
        let mut route = Route::new(Some(company.into()), "Weekly", Some("w-1".into()));
        route.created_at = Utc::now() - Duration::hours(hours_ago);
        repos.routes().save(route.clone()).await.unwrap();
        for _ in 0..assignments {
            repos
                .routes()
                .save_assignment(Assignment::new(route.id.clone(), Some("w-1".into()), None))
                .await
                .unwrap();
        }
        route
    }

    #[tokio::test]
    async fn sweep_closes_only_old_active_routes() {
        let repos = testing::repos().await;
        let service = RouteService::new(repos.clone(), DEFAULT_ROUTE_MAX_AGE_HOURS);

        let old = seed_route(repos.as_ref(), "co-1", 30, 2).await;
        let fresh = seed_route(repos.as_ref(), "co-1", 1, 1).await;

        let outcome = service.expire_stale_routes().await.unwrap();
        assert_eq!(outcome.routes_closed, 1);
        assert_eq!(outcome.assignments_expired, 2);

        let old = repos.routes().find_by_id(&old.id).await.unwrap().unwrap();
        assert_eq!(old.status, RouteStatus::Closed);
        let fresh = repos.routes().find_by_id(&fresh.id).await.unwrap().unwrap();
        assert_eq!(fresh.status, RouteStatus::Active);

        let again = service.expire_stale_routes().await.unwrap();
        assert!(again.is_empty());
    }

    #[tokio::test]
    async fn expire_route_is_root_only_and_closes_once() {
        let repos = testing::repos().await;
        let service = RouteService::new(repos.clone(), DEFAULT_ROUTE_MAX_AGE_HOURS);
        let root = testing::seed_user(repos.as_ref(), "r", "r@x.io", UserRole::Root, None).await;
        let admin =
            testing::seed_user(repos.as_ref(), "a", "a@x.io", UserRole::Admin, Some("co-1")).await;
        let route = seed_route(repos.as_ref(), "co-1", 1, 3).await;

        let err = service.expire_route(&admin, &route.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let outcome = service.expire_route(&root, &route.id).await.unwrap();
        assert_eq!(outcome.routes_closed, 1);
        assert_eq!(outcome.assignments_expired, 3);

        let assignments = repos.routes().find_assignments(&route.id).await.unwrap();
        assert!(assignments.iter().all(|a| a.status == AssignmentStatus::Expired));

        let err = service.expire_route(&root, &route.id).await.unwrap_err();
        assert!(matches!(err, DomainError::FailedPrecondition(_)));

        let err = service.expire_route(&root, "missing").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = service.expire_route(&root, " ").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn admins_only_see_their_company_routes() {
        let repos = testing::repos().await;
        let service = RouteService::new(repos.clone(), DEFAULT_ROUTE_MAX_AGE_HOURS);
        let admin =
            testing::seed_user(repos.as_ref(), "a", "a@x.io", UserRole::Admin, Some("co-1")).await;
        let worker =
            testing::seed_user(repos.as_ref(), "w", "w@x.io", UserRole::Worker, Some("co-1")).await;

        let own = seed_route(repos.as_ref(), "co-1", 1, 2).await;
        let foreign = seed_route(repos.as_ref(), "co-2", 1, 0).await;

        let details = service.get_route(&admin, &own.id).await.unwrap();
        assert_eq!(details.assignments.len(), 2);

        assert!(matches!(
            service.get_route(&admin, &foreign.id).await.unwrap_err(),
            DomainError::Forbidden(_)
        ));
        assert!(matches!(
            service.get_route(&worker, &own.id).await.unwrap_err(),
            DomainError::Forbidden(_)
        ));
    }
}
