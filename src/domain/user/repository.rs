use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::{GetUserDto, User, UserRole};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn find_by_uid(&self, uid: &str) -> DomainResult<Option<User>>;

    async fn list(&self, dto: GetUserDto) -> DomainResult<PaginatedResult<User>>;

    /// Insert the user document and link every unlinked customer whose email
    /// matches, in one transaction. Returns the number of customers linked.
    async fn create_with_customer_links(&self, user: User) -> DomainResult<u64>;

    /// Fails with `NotFound` when the user document does not exist.
    async fn update_role(&self, uid: &str, role: UserRole, now: DateTime<Utc>) -> DomainResult<()>;
}

/// Custom claims held by the identity provider.
#[async_trait]
pub trait IdentityClaimsRepository: Send + Sync {
    async fn get_role(&self, uid: &str) -> DomainResult<Option<UserRole>>;

    async fn set_role(&self, uid: &str, role: UserRole) -> DomainResult<()>;
}
