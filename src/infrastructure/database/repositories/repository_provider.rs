//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{
    CustomerRepository, IdentityClaimsRepository, InvitationRepository, RouteRepository,
    UserRepository,
};

use super::claims_repository::SeaOrmIdentityClaimsRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::invitation_repository::SeaOrmInvitationRepository;
use super::route_repository::SeaOrmRouteRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let user = repos.users().find_by_uid("uid-1").await?;
/// let stale = repos.routes().find_stale(cutoff).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    claims: SeaOrmIdentityClaimsRepository,
    customers: SeaOrmCustomerRepository,
    routes: SeaOrmRouteRepository,
    invitations: SeaOrmInvitationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            claims: SeaOrmIdentityClaimsRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            routes: SeaOrmRouteRepository::new(db.clone()),
            invitations: SeaOrmInvitationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn claims(&self) -> &dyn IdentityClaimsRepository {
        &self.claims
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn routes(&self) -> &dyn RouteRepository {
        &self.routes
    }

    fn invitations(&self) -> &dyn InvitationRepository {
        &self.invitations
    }
}
