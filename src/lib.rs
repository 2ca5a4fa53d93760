//! # Shinning Pools backend
//!
//! Server-side handlers for the pool maintenance apps: first-user root
//! provisioning, role management, route expiry, worker invitation
//! reminders and a geocoding proxy.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits and the error taxonomy
//! - **application**: use-cases and outbound ports
//! - **infrastructure**: SeaORM storage, token verification, geocoding client
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: runtime wiring and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, run_migrations, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiContext};

pub use server::{ServerHandle, ServerOptions};
