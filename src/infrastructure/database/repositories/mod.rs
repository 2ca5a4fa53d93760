//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod claims_repository;
pub mod customer_repository;
pub mod invitation_repository;
pub mod repository_provider;
pub mod route_repository;
pub mod user_repository;

pub use claims_repository::SeaOrmIdentityClaimsRepository;
pub use customer_repository::SeaOrmCustomerRepository;
pub use invitation_repository::SeaOrmInvitationRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use route_repository::SeaOrmRouteRepository;
pub use user_repository::SeaOrmUserRepository;
