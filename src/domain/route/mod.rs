//! Route aggregate
//!
//! Routes and their assignments transition together when a route closes.

pub mod model;
pub mod repository;

pub use model::{Assignment, AssignmentStatus, ExpiryOutcome, Route, RouteStatus};
pub use repository::RouteRepository;
