//! User domain entity

use chrono::{DateTime, Utc};

/// User role
///
/// `Root` is the elevated role. `Customer` is the lowest privilege and the
/// default for every account except the very first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    Root,
    Admin,
    Worker,
    #[default]
    Customer,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [Self::Root, Self::Admin, Self::Worker, Self::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Admin => "admin",
            Self::Worker => "worker",
            Self::Customer => "customer",
        }
    }

    /// Strict parse; unknown names are rejected rather than defaulted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "root" => Some(Self::Root),
            "admin" => Some(Self::Admin),
            "worker" => Some(Self::Worker),
            "customer" => Some(Self::Customer),
            _ => None,
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Root)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record handed over by the identity provider when an account is created.
#[derive(Debug, Clone, Default)]
pub struct AuthUserRecord {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email_verified: bool,
}

/// User document
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email_verified: bool,
    pub role: UserRole,
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub name: String,
    pub pending_company_request: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build the initial user document for a freshly created identity.
    pub fn provision(record: &AuthUserRecord, role: UserRole, now: DateTime<Utc>) -> Self {
        let email = record.email.as_deref().map(crate::shared::normalize_email);
        let name = record
            .display_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .map(str::to_string)
            })
            .unwrap_or_default();

        Self {
            uid: record.uid.clone(),
            email,
            display_name: record.display_name.clone(),
            photo_url: record.photo_url.clone(),
            email_verified: record.email_verified,
            role,
            company_id: None,
            company_name: None,
            name,
            pending_company_request: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: Option<&str>, display_name: Option<&str>) -> AuthUserRecord {
        AuthUserRecord {
            uid: "uid-1".into(),
            email: email.map(String::from),
            display_name: display_name.map(String::from),
            photo_url: None,
            email_verified: true,
        }
    }

    #[test]
    fn role_names_roundtrip() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("superuser"), None);
        assert_eq!(UserRole::parse("Root"), None);
    }

    #[test]
    fn only_root_is_elevated() {
        assert!(UserRole::Root.is_elevated());
        assert!(!UserRole::Admin.is_elevated());
        assert_eq!(UserRole::default(), UserRole::Customer);
    }

    #[test]
    fn provision_prefers_display_name() {
        let user = User::provision(
            &record(Some("Ana@Pools.com"), Some("Ana Lima")),
            UserRole::Customer,
            Utc::now(),
        );
        assert_eq!(user.name, "Ana Lima");
        assert_eq!(user.email.as_deref(), Some("ana@pools.com"));
        assert!(user.company_id.is_none());
        assert!(!user.pending_company_request);
    }

    #[test]
    fn provision_falls_back_to_email_local_part() {
        let user = User::provision(&record(Some("Bob@x.io"), None), UserRole::Root, Utc::now());
        assert_eq!(user.name, "bob");

        let user = User::provision(&record(None, None), UserRole::Customer, Utc::now());
        assert_eq!(user.name, "");
    }
}
