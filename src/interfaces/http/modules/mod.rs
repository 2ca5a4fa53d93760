pub mod client_config;
pub mod geocoding;
pub mod health;
pub mod hooks;
pub mod invitations;
pub mod metrics;
pub mod request_id;
pub mod routes;
pub mod users;
