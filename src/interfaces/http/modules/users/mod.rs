//! Users module: role management and root-only user queries

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
