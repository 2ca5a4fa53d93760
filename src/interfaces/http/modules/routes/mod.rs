//! Routes module: route expiry and lookup

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
