//! Repository for the `technicians` table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::technician::{CreateTechnician, Technician, UpdateTechnician};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, surname, national_id, birth_date, gender, city, \
                        address, phone, email, created_at, updated_at";

/// Provides CRUD operations for technicians.
pub struct TechnicianRepo;

impl TechnicianRepo {
    /// Insert a new technician, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTechnician,
    ) -> Result<Technician, sqlx::Error> {
        let query = format!(
            "INSERT INTO technicians (name, surname, national_id, birth_date, gender, city, address, phone, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technician>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.national_id)
            .bind(input.birth_date)
            .bind(&input.gender)
            .bind(&input.city)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a technician by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Technician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technicians WHERE id = $1");
        sqlx::query_as::<_, Technician>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all technicians ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Technician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technicians ORDER BY created_at DESC");
        sqlx::query_as::<_, Technician>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a technician. Only non-`None` fields in `input` are applied.
    /// The national id is immutable once assigned.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTechnician,
    ) -> Result<Option<Technician>, sqlx::Error> {
        let query = format!(
            "UPDATE technicians SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname),
                birth_date = COALESCE($4, birth_date),
                gender = COALESCE($5, gender),
                city = COALESCE($6, city),
                address = COALESCE($7, address),
                phone = COALESCE($8, phone),
                email = COALESCE($9, email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technician>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(input.birth_date)
            .bind(&input.gender)
            .bind(&input.city)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a technician. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM technicians WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
