//! Session user model.
//!
//! The session framework upstream only guarantees a basic profile (name,
//! email, image). [`SessionUser`] composes that profile with the fields the
//! rest of the application relies on being present: role, two-factor flag,
//! and whether the identity came from a third-party provider. All three are
//! mandatory by construction.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::user::{UserId, UserRole};

/// User information persisted in the authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    id: UserId,
    name: Option<String>,
    email: Option<String>,
    image: Option<String>,
    role: UserRole,
    two_factor_enabled: bool,
    oauth: bool,
}

impl SessionUser {
    /// Creates a session user from profile and security data.
    #[must_use]
    pub fn new(
        id: UserId,
        name: Option<String>,
        email: Option<String>,
        image: Option<String>,
        role: UserRole,
        two_factor_enabled: bool,
        oauth: bool,
    ) -> Self {
        Self {
            id,
            name,
            email,
            image,
            role,
            two_factor_enabled,
            oauth,
        }
    }

    /// Creates a session user, deriving the OAuth flag from the presence of
    /// a linked provider account.
    ///
    /// Credential-based users have no account record, so `None` means the
    /// identity was established locally.
    #[must_use]
    pub fn from_linked_account(
        id: UserId,
        name: Option<String>,
        email: Option<String>,
        image: Option<String>,
        role: UserRole,
        two_factor_enabled: bool,
        linked_account: Option<&Account>,
    ) -> Self {
        let oauth = linked_account.is_some();
        Self::new(id, name, email, image, role, two_factor_enabled, oauth)
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name, if the profile has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email, if the profile has one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the avatar URL, if the profile has one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the role classification.
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Returns whether two-factor authentication is enabled.
    #[must_use]
    pub fn two_factor_enabled(&self) -> bool {
        self.two_factor_enabled
    }

    /// Returns whether the identity came from a third-party provider.
    #[must_use]
    pub fn oauth(&self) -> bool {
        self.oauth
    }
}
