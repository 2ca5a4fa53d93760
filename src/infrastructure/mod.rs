//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod geocoding;

pub use database::{init_database, redact_url, run_migrations, DatabaseConfig};
pub use geocoding::GoogleGeocodingClient;
