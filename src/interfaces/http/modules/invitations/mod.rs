//! Invitations module: worker invitation reminders

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
