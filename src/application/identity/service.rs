//! User management service: application-layer orchestration
//!
//! Provisioning on account creation, role changes and the root-only user
//! queries. HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use crate::application::access::{require_root, Caller};
use crate::domain::{
    AuthUserRecord, DomainError, DomainResult, GetUserDto, RepositoryProvider, User, UserRole,
};
use crate::shared::{require_non_empty, PaginatedResult};

/// Result of provisioning a freshly created account
#[derive(Debug, Clone)]
pub struct ProvisionedUser {
    pub user: User,
    pub customers_linked: u64,
}

/// Result of a role change
#[derive(Debug, Clone)]
pub struct RoleChange {
    pub uid: String,
    pub role: UserRole,
    pub message: String,
}

/// User list filters as received from the caller. The role name is parsed
/// only after the caller is known to be root.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
}

/// User service: orchestrates identity / user-management use-cases.
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    /// Serializes provisioning so two simultaneous first sign-ins cannot both become root.
    provision_lock: Mutex<()>,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            provision_lock: Mutex::new(()),
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Create the user document for a new identity.
    ///
    /// The first user ever gets `root`; everyone after gets `customer`.
    /// The user document and the customer links are one batch; the custom
    /// claims are set once that batch has committed.
    pub async fn on_user_created(&self, record: AuthUserRecord) -> DomainResult<ProvisionedUser> {
        let uid = require_non_empty("uid", &record.uid)?.to_string();

        let _guard = self.provision_lock.lock().await;

        if self.repos.users().find_by_uid(&uid).await?.is_some() {
            return Err(DomainError::FailedPrecondition(format!(
                "User {} is already provisioned",
                uid
            )));
        }

        let role = if self.repos.users().count().await? == 0 {
            UserRole::Root
        } else {
            UserRole::Customer
        };

        let record = AuthUserRecord { uid, ..record };
        let user = User::provision(&record, role, Utc::now());
        let customers_linked = self
            .repos
            .users()
            .create_with_customer_links(user.clone())
            .await?;

        self.repos.claims().set_role(&user.uid, role).await?;

        metrics::counter!("users_provisioned_total", "role" => role.as_str()).increment(1);
        info!(
            uid = %user.uid,
            email = ?user.email,
            %role,
            customers_linked,
            "User created"
        );

        Ok(ProvisionedUser {
            user,
            customers_linked,
        })
    }

    // ── Commands ────────────────────────────────────────────────

    pub async fn change_user_role(
        &self,
        caller: &Caller,
        uid: &str,
        new_role: &str,
    ) -> DomainResult<RoleChange> {
        require_root(self.repos.as_ref(), caller, "Only root users can change roles").await?;

        let uid = require_non_empty("uid", uid)?;
        let role = UserRole::parse(new_role.trim())
            .ok_or_else(|| DomainError::Validation("Invalid role specified".into()))?;

        if uid == caller.uid && role != UserRole::Root {
            return Err(DomainError::Forbidden(
                "Root users cannot demote themselves".into(),
            ));
        }

        self.repos.users().update_role(uid, role, Utc::now()).await?;
        self.repos.claims().set_role(uid, role).await?;

        metrics::counter!("user_role_changes_total").increment(1);
        info!(uid, %role, changed_by = %caller.uid, "User role changed");

        Ok(RoleChange {
            uid: uid.to_string(),
            role,
            message: format!("User role updated to {}", role),
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user_info(&self, caller: &Caller, uid: &str) -> DomainResult<User> {
        require_root(
            self.repos.as_ref(),
            caller,
            "Only root users can access user information",
        )
        .await?;

        let uid = require_non_empty("uid", uid)?;
        self.repos
            .users()
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "User",
                field: "uid",
                value: uid.to_string(),
            })
    }

    /// List users with search, filtering, sorting and pagination.
    pub async fn list_users(
        &self,
        caller: &Caller,
        query: UserListQuery,
    ) -> DomainResult<PaginatedResult<User>> {
        require_root(self.repos.as_ref(), caller, "Only root users can list users").await?;

        let role = match query.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            Some(name) => Some(UserRole::parse(name).ok_or_else(|| {
                DomainError::Validation(format!("Unknown role '{}'", name))
            })?),
            None => None,
        };

        self.repos
            .users()
            .list(GetUserDto {
                search: query.search,
                role,
                page: query.page,
                page_size: query.page_size,
                sort_by: query.sort_by,
            })
            .await
    }
}
