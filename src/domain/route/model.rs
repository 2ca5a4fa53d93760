//! Route and assignment domain entities

use chrono::{DateTime, Duration, Utc};

/// Route status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStatus {
    /// Route is being worked
    Active,
    /// Route closed by age or by an elevated user
    Closed,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignment status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Active,
    /// Parent route closed
    Expired,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduled unit of work for a worker
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub company_id: Option<String>,
    pub name: String,
    pub worker_id: Option<String>,
    pub status: RouteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Route {
    pub fn new(company_id: Option<String>, name: impl Into<String>, worker_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            company_id,
            name: name.into(),
            worker_id,
            status: RouteStatus::Active,
            created_at: now,
            updated_at: now,
            closed_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == RouteStatus::Active
    }

    /// Active and created more than `max_age` before `now`
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        self.is_active() && self.created_at < now - max_age
    }

    pub fn close(&mut self, now: DateTime<Utc>) {
        self.status = RouteStatus::Closed;
        self.closed_at = Some(now);
        self.updated_at = now;
    }
}

/// Stop on a route (one pool visit)
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub route_id: String,
    pub worker_id: Option<String>,
    pub customer_id: Option<String>,
    pub status: AssignmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expired_at: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn new(route_id: impl Into<String>, worker_id: Option<String>, customer_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            route_id: route_id.into(),
            worker_id,
            customer_id,
            status: AssignmentStatus::Active,
            created_at: now,
            updated_at: now,
            expired_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AssignmentStatus::Active
    }
}

/// What a single expiry batch changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpiryOutcome {
    pub route_ids: Vec<String>,
    pub routes_closed: u64,
    pub assignments_expired: u64,
}

impl ExpiryOutcome {
    pub fn is_empty(&self) -> bool {
        self.routes_closed == 0 && self.assignments_expired == 0
    }
}

// ── Tests ──────────────────────────────────────────────────────
