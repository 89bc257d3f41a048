//! Repository for the `accounts` table.

use helpdesk_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::account::{Account, CreateAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, surname, email, password_hash, role, verified, \
                        verification_token, reset_token, reset_expires, created_at, updated_at";

/// Provides persistence operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new unverified account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (name, surname, email, password_hash, verification_token)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.verification_token)
            .fetch_one(pool)
            .await
    }

    /// Find an account by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by (already normalized) email.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find an account holding the given verification token.
    pub async fn find_by_verification_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE verification_token = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Mark an account verified and clear its verification token.
    pub async fn mark_verified(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE accounts SET verified = true, verification_token = NULL WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Store a fresh password-reset token and its expiry on an account.
    pub async fn set_reset_token(
        pool: &PgPool,
        id: DbId,
        token: &str,
        expires: Timestamp,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE accounts SET reset_token = $2, reset_expires = $3 WHERE id = $1")
            .bind(id)
            .bind(token)
            .bind(expires)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find an account whose reset token matches and has not yet expired.
    ///
    /// Expired-but-matching tokens return `None`, indistinguishable from
    /// tokens that were never issued.
    pub async fn find_by_valid_reset_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM accounts
             WHERE reset_token = $1 AND reset_expires > now()"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Set a new password hash and clear both reset fields.
    ///
    /// Returns `true` if the row was updated.
    pub async fn update_password_and_clear_reset(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE accounts SET
                password_hash = $2,
                reset_token = NULL,
                reset_expires = NULL
             WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
