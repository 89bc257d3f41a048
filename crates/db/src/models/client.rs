//! Client entity model and DTOs.

use chrono::NaiveDate;
use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full client row from the `clients` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub surname: Option<String>,
    pub national_id: String,
    pub city: Option<String>,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    /// Organizational unit the client belongs to.
    pub department: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub surname: Option<String>,
    pub national_id: String,
    pub city: Option<String>,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub department: String,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub department: Option<String>,
}
