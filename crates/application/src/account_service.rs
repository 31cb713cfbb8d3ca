//! Account lookup ports and application service.
//!
//! Owns read-side access to linked provider accounts. Lookup outcomes keep
//! "no account" and "query failed" distinguishable so callers decide how to
//! treat infrastructure failures; a legacy view that collapses both into
//! absence is kept for callers that want the old behavior.

use std::sync::Arc;

use async_trait::async_trait;

use authgrid_core::{AppError, AppResult};
use authgrid_domain::{Account, UserId};

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Repository port for account persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds the first account linked to a user, if any.
    async fn find_first_by_user_id(&self, user_id: &UserId) -> AppResult<Option<Account>>;
}

// ---------------------------------------------------------------------------
// Lookup outcome
// ---------------------------------------------------------------------------

/// Result of an account lookup.
///
/// Absence and failure are separate variants: a user without a linked
/// account is a normal answer, a persistence failure is not.
#[derive(Debug)]
pub enum AccountLookup {
    /// A linked account exists for the user.
    Found(Account),
    /// No account is linked to the user.
    NotFound,
    /// The persistence layer failed before an answer was known.
    QueryError(AppError),
}

impl AccountLookup {
    /// Collapses the lookup into an optional record, treating a query
    /// failure the same as "not found".
    #[must_use]
    pub fn into_found(self) -> Option<Account> {
        match self {
            Self::Found(account) => Some(account),
            Self::NotFound | Self::QueryError(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Application service for account lookups.
#[derive(Clone)]
pub struct AccountService {
    account_repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Creates a new account service.
    #[must_use]
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }

    /// Looks up the first account linked to `user_id`.
    ///
    /// Never returns `Err`: repository failures surface as
    /// [`AccountLookup::QueryError`] so callers can still tell them apart
    /// from a missing account.
    pub async fn lookup_by_user_id(&self, user_id: &UserId) -> AccountLookup {
        match self.account_repository.find_first_by_user_id(user_id).await {
            Ok(Some(account)) => AccountLookup::Found(account),
            Ok(None) => AccountLookup::NotFound,
            Err(error) => AccountLookup::QueryError(error),
        }
    }

    /// Looks up the first account linked to `user_id`, treating repository
    /// failures as absence.
    ///
    /// Suppressed failures are logged at `warn`; callers that need to react
    /// to them should use [`Self::lookup_by_user_id`] instead.
    pub async fn find_by_user_id(&self, user_id: &UserId) -> Option<Account> {
        match self.lookup_by_user_id(user_id).await {
            AccountLookup::QueryError(error) => {
                tracing::warn!(user_id = %user_id, "suppressing account lookup failure: {error}");
                None
            }
            outcome => outcome.into_found(),
        }
    }
}
