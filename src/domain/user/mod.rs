//! User aggregate
//!
//! Contains the User entity, the identity claims contract, and repository interfaces.

pub mod model;
pub mod repository;

mod dto_get;

pub use model::{AuthUserRecord, User, UserRole};

pub use dto_get::GetUserDto;

pub use repository::{IdentityClaimsRepository, UserRepository};
