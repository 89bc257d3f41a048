//! Repository for the `clients` table.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, surname, national_id, city, email, address, phone, \
                        birth_date, department, created_at, updated_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, surname, national_id, city, email, address, phone, birth_date, department)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.national_id)
            .bind(&input.city)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(input.birth_date)
            .bind(&input.department)
            .fetch_one(pool)
            .await
    }

    /// Find a client by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    /// The national id is immutable once assigned.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname),
                city = COALESCE($4, city),
                email = COALESCE($5, email),
                address = COALESCE($6, address),
                phone = COALESCE($7, phone),
                birth_date = COALESCE($8, birth_date),
                department = COALESCE($9, department)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.city)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(input.birth_date)
            .bind(&input.department)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
