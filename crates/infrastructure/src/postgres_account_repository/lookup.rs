use super::*;

impl PostgresAccountRepository {
    pub(super) async fn find_first_by_user_id_impl(
        &self,
        user_id: &UserId,
    ) -> AppResult<Option<Account>> {
        // ORDER BY id keeps "first" deterministic across identical queries.
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, user_id, account_type, provider, provider_account_id,
                   refresh_token, access_token, expires_at, token_type, scope,
                   id_token, session_state
            FROM accounts
            WHERE user_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find account by user id: {error}"))
        })?;

        row.map(Account::try_from).transpose()
    }
}
