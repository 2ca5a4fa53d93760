//! Routes module: time-based route expiration

pub mod expiry_task;
pub mod service;

pub use expiry_task::start_route_expiry_task;
pub use service::{RouteDetails, RouteService, DEFAULT_ROUTE_MAX_AGE_HOURS};
