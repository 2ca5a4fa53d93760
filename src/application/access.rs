//! Caller identity and role checks shared by the use-cases.
//!
//! The role is always read from the identity provider's current custom
//! claims, never from the token the caller presented.

use crate::domain::{DomainError, DomainResult, RepositoryProvider, User, UserRole};

/// Authenticated caller of a use-case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub uid: String,
    pub email: Option<String>,
}

impl Caller {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
        }
    }
}

/// Current role of the caller; no claims means the lowest role.
pub async fn current_role(repos: &dyn RepositoryProvider, caller: &Caller) -> DomainResult<UserRole> {
    Ok(repos.claims().get_role(&caller.uid).await?.unwrap_or_default())
}

/// Fails with `Forbidden(denied)` unless the caller holds one of `allowed`.
pub async fn require_role(
    repos: &dyn RepositoryProvider,
    caller: &Caller,
    allowed: &[UserRole],
    denied: &str,
) -> DomainResult<UserRole> {
    let role = current_role(repos, caller).await?;
    if !allowed.contains(&role) {
        return Err(DomainError::Forbidden(denied.to_string()));
    }
    Ok(role)
}

pub async fn require_root(
    repos: &dyn RepositoryProvider,
    caller: &Caller,
    denied: &str,
) -> DomainResult<()> {
    require_role(repos, caller, &[UserRole::Root], denied).await?;
    Ok(())
}

/// Company the caller's user document belongs to, if any
pub async fn caller_company(
    repos: &dyn RepositoryProvider,
    caller: &Caller,
) -> DomainResult<Option<String>> {
    Ok(repos
        .users()
        .find_by_uid(&caller.uid)
        .await?
        .and_then(|u: User| u.company_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing;

    #[tokio::test]
    async fn missing_claims_mean_customer() {
        let repos = testing::repos().await;
        let role = current_role(repos.as_ref(), &Caller::new("nobody")).await.unwrap();
        assert_eq!(role, UserRole::Customer);
    }

    #[tokio::test]
    async fn require_role_reads_current_claims() {
        let repos = testing::repos().await;
        let caller = testing::seed_user(repos.as_ref(), "u1", "a@x.io", UserRole::Admin, None).await;

        let err = require_root(repos.as_ref(), &caller, "root only").await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(ref m) if m == "root only"));

        repos.claims().set_role("u1", UserRole::Root).await.unwrap();
        assert!(require_root(repos.as_ref(), &caller, "root only").await.is_ok());
    }
}
