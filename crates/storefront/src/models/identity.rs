//! Identity types.
//!
//! The identity record is serialized with the exact field names the legacy
//! frontend stored in `localStorage` (`userType`, `joinDate`, ...), so a
//! persisted record from the old app deserializes cleanly.

use serde::{Deserialize, Serialize};

use krishi_jyothi_core::{Email, Role, UserId};

use super::ValidationError;

/// The authenticated user record held by the session manager.
///
/// Never carries a password; credentials live only in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique, immutable identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, unique across the catalog.
    pub email: Email,
    /// Farmer or consumer.
    #[serde(rename = "userType")]
    pub role: Role,
    /// Free-text location, e.g. "Nashik, Maharashtra".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Join date formatted as "Month Year".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    /// Profile image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Free-text bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Identity {
    /// Shallow-merge a profile update into this identity; later fields win.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(profile_image) = update.profile_image {
            self.profile_image = Some(profile_image);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
    }
}

/// Partial identity submitted from the profile form.
///
/// Only profile-owned fields can be changed here; id, email, and role are
/// fixed at signup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
}

/// Typed record for the signup form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "userType")]
    pub role: Role,
}

impl SignupDraft {
    /// Validate the draft, returning the parsed email on success.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a required field is blank or the email
    /// is malformed.
    pub fn validate(&self) -> Result<Email, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Missing { field: "name" });
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::Missing { field: "password" });
        }
        Ok(Email::parse(&self.email)?)
    }
}
