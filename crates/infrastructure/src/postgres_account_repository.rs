//! PostgreSQL-backed account repository.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::PgPool;

use authgrid_application::AccountRepository;
use authgrid_core::{AppError, AppResult};
use authgrid_domain::{Account, AccountId, AccountType, UserId};

/// PostgreSQL implementation of the account repository port.
#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: String,
    user_id: String,
    account_type: String,
    provider: String,
    provider_account_id: String,
    refresh_token: Option<String>,
    access_token: Option<String>,
    expires_at: Option<i64>,
    token_type: Option<String>,
    scope: Option<String>,
    id_token: Option<String>,
    session_state: Option<String>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AppError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AccountId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            account_type: AccountType::from_str(row.account_type.as_str())?,
            provider: row.provider,
            provider_account_id: row.provider_account_id,
            refresh_token: row.refresh_token,
            access_token: row.access_token,
            expires_at: row.expires_at,
            token_type: row.token_type,
            scope: row.scope,
            id_token: row.id_token,
            session_state: row.session_state,
        })
    }
}

mod lookup;


#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_first_by_user_id(&self, user_id: &UserId) -> AppResult<Option<Account>> {
        self.find_first_by_user_id_impl(user_id).await
    }
}
