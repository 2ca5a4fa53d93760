//! Route repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{Assignment, ExpiryOutcome, Route};
use crate::domain::DomainResult;

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn save(&self, route: Route) -> DomainResult<()>;

    async fn save_assignment(&self, assignment: Assignment) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Route>>;

    async fn find_assignments(&self, route_id: &str) -> DomainResult<Vec<Assignment>>;

    /// Active routes created before `cutoff`
    async fn find_stale(&self, cutoff: DateTime<Utc>) -> DomainResult<Vec<Route>>;

    /// Close the given active routes and expire all of their active
    /// assignments in one transaction.
    async fn expire_routes(&self, route_ids: &[String], now: DateTime<Utc>) -> DomainResult<ExpiryOutcome>;
}
