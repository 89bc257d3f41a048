//! Technician entity model and DTOs.

use chrono::NaiveDate;
use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full technician row from the `technicians` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Technician {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub national_id: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new technician.
#[derive(Debug, Deserialize)]
pub struct CreateTechnician {
    pub name: String,
    pub surname: String,
    pub national_id: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// DTO for updating an existing technician. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTechnician {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
