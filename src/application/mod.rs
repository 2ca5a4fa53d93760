//! Application layer: use-cases orchestrating the domain repositories

pub mod access;
pub mod geocoding;
pub mod identity;
pub mod invitations;
pub mod ports;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

pub use access::Caller;
pub use geocoding::GeocodingService;
pub use identity::UserService;
pub use invitations::InvitationService;
pub use routes::{start_route_expiry_task, RouteService};
