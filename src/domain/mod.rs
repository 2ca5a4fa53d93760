pub mod customer;
pub mod invitation;
pub mod repositories;
pub mod route;
pub mod user;

pub use customer::{Customer, CustomerRepository};
pub use invitation::{InvitationRepository, InvitationStatus, ReminderNotification, WorkerInvitation};
pub use repositories::{DomainResult, RepositoryProvider};
pub use route::{Assignment, AssignmentStatus, ExpiryOutcome, Route, RouteRepository, RouteStatus};
pub use user::{
    AuthUserRecord, GetUserDto, IdentityClaimsRepository, User, UserRepository, UserRole,
};

pub use crate::shared::errors::{DomainError, ErrorCode};
