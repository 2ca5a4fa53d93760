//! Customer domain entity

use chrono::{DateTime, Utc};

/// Business record of a pool owner served by a company.
///
/// Linked to a `User` once, when a user with the same email registers.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub company_id: Option<String>,
    pub name: String,
    /// Stored lower-cased
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linked_user_id: Option<String>,
    pub linked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        company_id: Option<String>,
        name: impl Into<String>,
        email: Option<&str>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            company_id,
            name: name.into(),
            email: email.map(crate::shared::normalize_email),
            phone: None,
            address: None,
            linked_user_id: None,
            linked_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_linked(&self) -> bool {
        self.linked_user_id.is_some()
    }
}
