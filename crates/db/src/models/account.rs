//! Account entity model and DTOs.

use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account role. Assigned at creation and never updated afterwards; there is
/// deliberately no update path for this column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    User,
}

/// Full account row from the `accounts` table.
///
/// Contains the password hash and token material -- NEVER serialize this to
/// API responses directly. Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: AccountRole,
    pub verified: bool,
    pub verification_token: Option<String>,
    pub reset_token: Option<String>,
    pub reset_expires: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of an account (no hash, no tokens).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub role: AccountRole,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            surname: account.surname.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

/// DTO for inserting a new (unverified) account.
#[derive(Debug)]
pub struct CreateAccount {
    pub name: String,
    pub surname: String,
    /// Already normalized (trimmed, lower-cased).
    pub email: String,
    pub password_hash: String,
    pub verification_token: String,
}
