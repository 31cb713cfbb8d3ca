//! In-memory account repository for development and tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use authgrid_application::AccountRepository;
use authgrid_core::{AppError, AppResult};
use authgrid_domain::{Account, UserId};

/// In-memory account repository implementation.
///
/// Insertion order defines which account is "first" for a user.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Inserts an account record.
    ///
    /// This subsystem never creates accounts in production; insertion exists
    /// so development setups and tests can seed linkages.
    pub async fn insert(&self, account: Account) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|existing| existing.id == account.id) {
            return Err(AppError::Validation(format!(
                "account '{}' already exists",
                account.id
            )));
        }

        accounts.push(account);
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_first_by_user_id(&self, user_id: &UserId) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;

        Ok(accounts
            .iter()
            .find(|account| account.user_id == *user_id)
            .cloned())
    }
}
