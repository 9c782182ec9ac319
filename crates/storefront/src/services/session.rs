//! Session manager.
//!
//! Owns the current authenticated identity and keeps it in sync with the
//! key-value store. The persisted record is read once at construction; from
//! then on the in-memory state is the source of truth and is re-synced to
//! the store on every identity-affecting transition.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use krishi_jyothi_core::{Email, Role};

use crate::models::{Identity, ProfileUpdate};
use crate::store::{KeyValueStore, keys};

use super::CredentialCatalog;

/// Authentication state of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No identity is logged in.
    #[default]
    Unauthenticated,
    /// A login or signup is in flight; role-gated actions must be disabled.
    Authenticating,
    /// An identity is logged in.
    Authenticated(Identity),
}

/// Manages the current authenticated identity for this session.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    catalog: CredentialCatalog,
    /// Simulated network latency applied to login and signup.
    latency: Duration,
    state: Mutex<SessionState>,
}

impl SessionManager {
    /// Create a session manager, restoring any persisted identity.
    ///
    /// A malformed or unreadable persisted record degrades to
    /// `Unauthenticated` with a warning rather than failing startup.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, catalog: CredentialCatalog, latency: Duration) -> Self {
        let state = match store.get(keys::SESSION_IDENTITY) {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    tracing::debug!(user = %identity.email, "Restored persisted session");
                    SessionState::Authenticated(identity)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed persisted session");
                    SessionState::Unauthenticated
                }
            },
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted session");
                SessionState::Unauthenticated
            }
        };

        Self {
            store,
            catalog,
            latency,
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Log in against the credential catalog.
    ///
    /// Returns `false` on a credential mismatch, leaving any prior session
    /// state unchanged; bad credentials are an ordinary outcome, not an
    /// error. The returned identity never carries a password. Structurally
    /// invalid emails fail fast since they can never match the catalog.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        let Ok(email) = Email::parse(email) else {
            return false;
        };

        let previous = self.state().clone();
        *self.state() = SessionState::Authenticating;
        tokio::time::sleep(self.latency).await;

        match self.catalog.authenticate(&email, password) {
            Some(identity) => {
                self.persist(&identity);
                tracing::info!(user = %identity.email, "Login succeeded");
                *self.state() = SessionState::Authenticated(identity);
                true
            }
            None => {
                tracing::info!(user = %email, "Login failed");
                *self.state() = previous;
                false
            }
        }
    }

    /// Sign up a new identity.
    ///
    /// Returns `false` if the email is already registered, leaving any prior
    /// session state unchanged. On success the identity is registered in the
    /// catalog (so it can log in again later), becomes the current identity,
    /// and is persisted.
    pub async fn signup(&self, name: &str, email: Email, password: &str, role: Role) -> bool {
        let previous = self.state().clone();
        *self.state() = SessionState::Authenticating;
        tokio::time::sleep(self.latency).await;

        if self.catalog.contains_email(&email) {
            tracing::info!(user = %email, "Signup rejected: email already registered");
            *self.state() = previous;
            return false;
        }

        let identity = self.catalog.register(name, email, password, role);
        self.persist(&identity);
        tracing::info!(user = %identity.email, role = %identity.role, "Signup succeeded");
        *self.state() = SessionState::Authenticated(identity);
        true
    }

    /// Log out, clearing both memory and the persisted record.
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(keys::SESSION_IDENTITY) {
            tracing::error!(error = %e, "Failed to clear persisted session");
        }
        *self.state() = SessionState::Unauthenticated;
        tracing::info!("Logged out");
    }

    /// Shallow-merge a profile update into the current identity and
    /// re-persist it. Returns the updated identity, or `None` if nobody
    /// is logged in.
    pub fn update_profile(&self, update: ProfileUpdate) -> Option<Identity> {
        let mut state = self.state();
        let SessionState::Authenticated(identity) = &mut *state else {
            return None;
        };

        identity.apply(update);
        let updated = identity.clone();
        drop(state);

        self.persist(&updated);
        Some(updated)
    }

    /// The current identity, if authenticated.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        match &*self.state() {
            SessionState::Authenticated(identity) => Some(identity.clone()),
            _ => None,
        }
    }

    /// Whether a login or signup is in flight.
    #[must_use]
    pub fn is_authenticating(&self) -> bool {
        matches!(&*self.state(), SessionState::Authenticating)
    }

    /// A snapshot of the session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state().clone()
    }

    /// Re-sync the persisted record with the given identity.
    ///
    /// Storage failures are logged and swallowed: in-memory state stays
    /// authoritative for the rest of the session.
    fn persist(&self, identity: &Identity) {
        match serde_json::to_string(identity) {
            Ok(raw) => {
                if let Err(e) = self.store.set(keys::SESSION_IDENTITY, &raw) {
                    tracing::error!(error = %e, "Failed to persist session");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize session"),
        }
    }
}
