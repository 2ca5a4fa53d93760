//! Fixtures for use-case tests

use std::sync::Arc;

use chrono::Utc;

use super::access::Caller;
use crate::domain::{AuthUserRecord, RepositoryProvider, User, UserRole};
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::database::test_connection;

pub(crate) async fn repos() -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(test_connection().await))
}

/// Stores a user document plus matching custom claims and returns it as a caller.
pub(crate) async fn seed_user(
    repos: &dyn RepositoryProvider,
    uid: &str,
    email: &str,
    role: UserRole,
    company_id: Option<&str>,
) -> Caller {
    let record = AuthUserRecord {
        uid: uid.to_string(),
        email: Some(email.to_string()),
        ..Default::default()
    };
    let mut user = User::provision(&record, role, Utc::now());
    user.company_id = company_id.map(str::to_string);

    repos.users().create_with_customer_links(user).await.unwrap();
    repos.claims().set_role(uid, role).await.unwrap();

    Caller {
        uid: uid.to_string(),
        email: Some(email.to_string()),
    }
}
