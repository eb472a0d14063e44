//! User accounts and profile updates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamspace_common::UserId;

/// Access level of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

/// A registered account.
///
/// Passwords are stored and compared as plain text. This is a data model
/// for a collaborative workspace, not an authentication system; anything
/// security-sensitive belongs in front of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Display name, shown on cards and used for mention tokens
    pub name: String,
    /// Login email, unique case-insensitively
    pub email: String,
    /// Login password, plain text
    pub password: String,
    /// Access level
    #[serde(default)]
    pub role: Role,
    /// Optional avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a member account with a fresh id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: Role::default(),
            profile_image: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// A partial profile update. `None` fields are left untouched; the
/// profile image uses a nested `Option` so it can be cleared.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub password: Option<String>,
    pub profile_image: Option<Option<String>>,
}

impl UserPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the profile image.
    pub fn profile_image(mut self, image: impl Into<String>) -> Self {
        self.profile_image = Some(Some(image.into()));
        self
    }

    /// Clears the profile image.
    pub fn clear_profile_image(mut self) -> Self {
        self.profile_image = Some(None);
        self
    }

    /// Applies the patch to a user, overwriting only the set fields.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(profile_image) = self.profile_image {
            user.profile_image = profile_image;
        }
    }
}
