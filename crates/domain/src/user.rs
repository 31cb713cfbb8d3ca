//! User identity types shared by the account and session models.

use std::str::FromStr;

use authgrid_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Opaque identifier for a user record.
///
/// The backing store assigns these; the only invariant enforced here is
/// non-emptiness. No format (UUID, cuid, ...) is imposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(NonEmptyString);

impl UserId {
    /// Creates a user identifier from an opaque non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.as_str())
    }
}

/// Role classification carried by every authenticated session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Administrative user with elevated access.
    Admin,
    /// Regular user. The default for new accounts.
    #[default]
    User,
}

impl UserRole {
    /// Returns the stable storage string for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(AppError::Validation(format!(
                "unknown user role '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{UserId, UserRole};

    #[test]
    fn empty_user_id_is_rejected() {
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn whitespace_user_id_is_rejected() {
        assert!(UserId::new("  \t").is_err());
    }

    #[test]
    fn opaque_user_id_is_accepted_verbatim() {
        let user_id = UserId::new("clx0q2w3e0000abcd1234wxyz");
        assert!(user_id.is_ok());
        assert_eq!(
            user_id.map(|id| id.to_string()).unwrap_or_default(),
            "clx0q2w3e0000abcd1234wxyz"
        );
    }

    #[test]
    fn role_storage_strings_round_trip() {
        for role in [UserRole::Admin, UserRole::User] {
            assert_eq!(UserRole::from_str(role.as_str()).ok(), Some(role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(UserRole::from_str("superuser").is_err());
    }

    #[test]
    fn default_role_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }
}
