//! Hooks module: identity provider and scheduler callbacks

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
