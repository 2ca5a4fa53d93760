//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::identity::{RoleChange, UserListQuery};
use crate::domain::User;

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub uid: String,
    pub email: Option<String>,
    pub name: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email_verified: bool,
    /// root, admin, worker or customer
    pub role: String,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub pending_company_request: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            uid: u.uid,
            email: u.email,
            name: u.name,
            display_name: u.display_name,
            photo_url: u.photo_url,
            email_verified: u.email_verified,
            role: u.role.as_str().to_string(),
            company_id: u.company_id,
            company_name: u.company_name,
            pending_company_request: u.pending_company_request,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Change role request.
///
/// Fields default to empty so that a missing value is reported by the
/// service, after the caller has been authorized.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeRoleRequest {
    #[serde(default)]
    pub uid: String,
    /// root, admin, worker or customer
    #[serde(default, alias = "newRole")]
    pub new_role: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleChangeDto {
    pub uid: String,
    pub role: String,
    pub message: String,
}

impl From<RoleChange> for RoleChangeDto {
    fn from(c: RoleChange) -> Self {
        Self {
            uid: c.uid,
            role: c.role.as_str().to_string(),
            message: c.message,
        }
    }
}

/// List users query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Search by email or name
    pub search: Option<String>,
    /// Filter by role (root, admin, worker, customer)
    pub role: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Sort field (email, name, role); newest first when absent
    pub sort_by: Option<String>,
}

impl From<ListUsersParams> for UserListQuery {
    fn from(p: ListUsersParams) -> Self {
        Self {
            search: p.search,
            role: p.role,
            page: Some(p.page),
            page_size: Some(p.page_size),
            sort_by: p.sort_by,
        }
    }
}

fn default_page() -> u32 {
    1
}
fn default_page_size() -> u32 {
    20
}
