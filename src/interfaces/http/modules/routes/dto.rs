//! Route DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::routes::RouteDetails;
use crate::domain::{Assignment, ExpiryOutcome, Route};

/// Result of an expiry batch
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExpiryOutcomeDto {
    pub routes_closed: u64,
    pub assignments_expired: u64,
    pub route_ids: Vec<String>,
}

impl From<ExpiryOutcome> for ExpiryOutcomeDto {
    fn from(o: ExpiryOutcome) -> Self {
        Self {
            routes_closed: o.routes_closed,
            assignments_expired: o.assignments_expired,
            route_ids: o.route_ids,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub id: String,
    pub company_id: Option<String>,
    pub name: String,
    pub worker_id: Option<String>,
    /// ACTIVE or CLOSED
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl From<Route> for RouteDto {
    fn from(r: Route) -> Self {
        Self {
            id: r.id,
            company_id: r.company_id,
            name: r.name,
            worker_id: r.worker_id,
            status: r.status.as_str().to_string(),
            created_at: r.created_at,
            updated_at: r.updated_at,
            closed_at: r.closed_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssignmentDto {
    pub id: String,
    pub route_id: String,
    pub worker_id: Option<String>,
    pub customer_id: Option<String>,
    /// Active or Expired
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expired_at: Option<DateTime<Utc>>,
}

impl From<Assignment> for AssignmentDto {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id,
            route_id: a.route_id,
            worker_id: a.worker_id,
            customer_id: a.customer_id,
            status: a.status.as_str().to_string(),
            created_at: a.created_at,
            updated_at: a.updated_at,
            expired_at: a.expired_at,
        }
    }
}

/// Route with its assignments
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteDetailsDto {
    pub route: RouteDto,
    pub assignments: Vec<AssignmentDto>,
}

impl From<RouteDetails> for RouteDetailsDto {
    fn from(d: RouteDetails) -> Self {
        Self {
            route: d.route.into(),
            assignments: d.assignments.into_iter().map(AssignmentDto::from).collect(),
        }
    }
}
