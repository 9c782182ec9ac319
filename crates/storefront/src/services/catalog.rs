//! Fixed credential catalog.
//!
//! Stands in for a user database. Seeded with the demo accounts the legacy
//! frontend shipped; signup appends to it so a freshly registered user can
//! log out and log back in with the same credentials.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use krishi_jyothi_core::{Email, Role, UserId};

use crate::models::Identity;

/// Placeholder profile image used for demo and newly registered accounts.
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=200";

/// One catalog entry: an identity plus its login password.
///
/// The password never leaves this module; lookups return the identity only.
#[derive(Debug, Clone)]
struct CatalogEntry {
    identity: Identity,
    password: String,
}

/// The fixed set of valid login credentials.
#[derive(Debug)]
pub struct CredentialCatalog {
    entries: Mutex<Vec<CatalogEntry>>,
}

impl CredentialCatalog {
    /// Catalog seeded with the two demo accounts
    /// (`farmer@example.com` / `consumer@example.com`, both `password123`).
    #[must_use]
    pub fn with_demo_users() -> Self {
        let entries = vec![
            CatalogEntry {
                identity: Identity {
                    id: UserId::new(1),
                    name: "Rajesh Patel".to_string(),
                    email: Email::parse("farmer@example.com").expect("seed email is valid"),
                    role: Role::Farmer,
                    location: Some("Nashik, Maharashtra".to_string()),
                    join_date: Some("January 2023".to_string()),
                    profile_image: Some(PLACEHOLDER_IMAGE.to_string()),
                    bio: Some(
                        "Third-generation farmer specializing in organic vegetables \
                         and sustainable farming practices."
                            .to_string(),
                    ),
                },
                password: "password123".to_string(),
            },
            CatalogEntry {
                identity: Identity {
                    id: UserId::new(2),
                    name: "Priya Sharma".to_string(),
                    email: Email::parse("consumer@example.com").expect("seed email is valid"),
                    role: Role::Consumer,
                    location: Some("Mumbai, Maharashtra".to_string()),
                    join_date: Some("March 2023".to_string()),
                    profile_image: Some(PLACEHOLDER_IMAGE.to_string()),
                    bio: Some(
                        "Passionate about supporting local farmers and eating fresh, \
                         organic produce."
                            .to_string(),
                    ),
                },
                password: "password123".to_string(),
            },
        ];

        Self {
            entries: Mutex::new(entries),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<CatalogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up an identity by credentials. Returns `None` on any mismatch;
    /// the caller cannot distinguish a wrong password from an unknown email.
    #[must_use]
    pub fn authenticate(&self, email: &Email, password: &str) -> Option<Identity> {
        self.entries()
            .iter()
            .find(|entry| entry.identity.email == *email && entry.password == password)
            .map(|entry| entry.identity.clone())
    }

    /// Whether an identity with this email already exists.
    #[must_use]
    pub fn contains_email(&self, email: &Email) -> bool {
        self.entries()
            .iter()
            .any(|entry| entry.identity.email == *email)
    }

    /// Register a new identity with the next sequential ID and a join date
    /// of the current month, and return it.
    ///
    /// The caller is responsible for checking [`Self::contains_email`] first.
    pub fn register(&self, name: &str, email: Email, password: &str, role: Role) -> Identity {
        let mut entries = self.entries();
        let next_id = entries
            .iter()
            .map(|entry| entry.identity.id)
            .max()
            .map_or(UserId::new(1), UserId::next);

        let identity = Identity {
            id: next_id,
            name: name.to_string(),
            email,
            role,
            location: None,
            join_date: Some(Utc::now().format("%B %Y").to_string()),
            profile_image: Some(PLACEHOLDER_IMAGE.to_string()),
            bio: None,
        };

        entries.push(CatalogEntry {
            identity: identity.clone(),
            password: password.to_string(),
        });

        identity
    }
}

impl Default for CredentialCatalog {
    fn default() -> Self {
        Self::with_demo_users()
    }
}
