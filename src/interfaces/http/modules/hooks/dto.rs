//! Lifecycle hook payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::interfaces::http::modules::users::UserDto;
use crate::application::identity::ProvisionedUser;
use crate::domain::AuthUserRecord;

/// Identity record sent by the identity provider when an account is created
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedHook {
    #[validate(length(min = 1, message = "uid is required"))]
    pub uid: String,
    #[validate(email)]
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl From<UserCreatedHook> for AuthUserRecord {
    fn from(h: UserCreatedHook) -> Self {
        Self {
            uid: h.uid,
            email: h.email,
            display_name: h.display_name,
            photo_url: h.photo_url,
            email_verified: h.email_verified,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProvisionedUserDto {
    pub user: UserDto,
    /// Customers attached to the new user by email
    pub customers_linked: u64,
}

impl From<ProvisionedUser> for ProvisionedUserDto {
    fn from(p: ProvisionedUser) -> Self {
        Self {
            user: p.user.into(),
            customers_linked: p.customers_linked,
        }
    }
}
