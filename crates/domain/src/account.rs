//! Linked third-party provider accounts.
//!
//! An [`Account`] ties a local user to an identity provider. This subsystem
//! only reads these records; creation and deletion belong to the sign-in
//! flows that own the provider handshake.

use std::str::FromStr;

use authgrid_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

/// Opaque identifier for an account record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account identifier from an opaque non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        Ok(Self(NonEmptyString::new(value)?.into()))
    }

    /// Mints a fresh identifier for stores that do not assign their own.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Provider category for the auth handshake that produced an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// OAuth 2.0 provider.
    OAuth,
    /// OpenID Connect provider.
    Oidc,
    /// Email magic-link provider.
    Email,
    /// WebAuthn passkey provider.
    WebAuthn,
}

impl AccountType {
    /// Returns the stable storage string for this account type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OAuth => "oauth",
            Self::Oidc => "oidc",
            Self::Email => "email",
            Self::WebAuthn => "webauthn",
        }
    }
}

impl FromStr for AccountType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "oauth" => Ok(Self::OAuth),
            "oidc" => Ok(Self::Oidc),
            "email" => Ok(Self::Email),
            "webauthn" => Ok(Self::WebAuthn),
            _ => Err(AppError::Validation(format!(
                "unknown account type '{value}'"
            ))),
        }
    }
}

/// Persisted linkage between a local user and an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Owning user.
    pub user_id: UserId,
    /// Provider category.
    pub account_type: AccountType,
    /// Provider name, e.g. `github` or `google`.
    pub provider: String,
    /// User identifier in the provider's namespace.
    pub provider_account_id: String,
    /// Refresh token issued by the provider, if any.
    pub refresh_token: Option<String>,
    /// Access token issued by the provider, if any.
    pub access_token: Option<String>,
    /// Access token expiry as unix seconds, as reported by the provider.
    pub expires_at: Option<i64>,
    /// Token type reported by the provider, usually `bearer`.
    pub token_type: Option<String>,
    /// Granted scopes, space-separated.
    pub scope: Option<String>,
    /// Raw OIDC identity token, if any.
    pub id_token: Option<String>,
    /// Provider session state, if any.
    pub session_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{AccountId, AccountType};

    #[test]
    fn generated_account_ids_are_unique() {
        assert_ne!(AccountId::generate(), AccountId::generate());
    }

    #[test]
    fn empty_account_id_is_rejected() {
        assert!(AccountId::new("").is_err());
    }

    #[test]
    fn account_type_storage_strings_round_trip() {
        for account_type in [
            AccountType::OAuth,
            AccountType::Oidc,
            AccountType::Email,
            AccountType::WebAuthn,
        ] {
            assert_eq!(
                AccountType::from_str(account_type.as_str()).ok(),
                Some(account_type)
            );
        }
    }

    #[test]
    fn unknown_account_type_is_rejected() {
        assert!(AccountType::from_str("saml").is_err());
    }
}
