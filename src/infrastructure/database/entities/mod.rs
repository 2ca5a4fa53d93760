//! Database entities module

pub mod assignment;
pub mod customer;
pub mod identity_claim;
pub mod notification;
pub mod route;
pub mod user;
pub mod worker_invitation;

pub use assignment::Entity as Assignment;
pub use customer::Entity as Customer;
pub use identity_claim::Entity as IdentityClaim;
pub use notification::Entity as Notification;
pub use route::Entity as Route;
pub use user::Entity as User;
pub use worker_invitation::Entity as WorkerInvitation;
