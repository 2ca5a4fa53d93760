//! Repository traits for the domain layer
//!
//! - `RepositoryProvider` gives unified access to all per-aggregate repositories
//! - `DomainResult` is the standard result type for domain operations

use super::customer::CustomerRepository;
use super::invitation::InvitationRepository;
use super::route::RouteRepository;
use super::user::{IdentityClaimsRepository, UserRepository};
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let user = repos.users().find_by_uid("uid-1").await?;
///     let role = repos.claims().get_role("uid-1").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn claims(&self) -> &dyn IdentityClaimsRepository;
    fn customers(&self) -> &dyn CustomerRepository;
    fn routes(&self) -> &dyn RouteRepository;
    fn invitations(&self) -> &dyn InvitationRepository;
}
