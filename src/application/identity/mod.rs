//! Identity module: user provisioning & role management
//!
//! Contains the `UserService` which orchestrates the user-related
//! use-cases: provisioning on account creation, role changes, user queries.

pub mod service;

pub use service::{ProvisionedUser, RoleChange, UserListQuery, UserService};
