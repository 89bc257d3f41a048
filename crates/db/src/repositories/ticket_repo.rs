//! Repository for the `tickets` table.
//!
//! Read paths join the referenced technician and client rows so API
//! responses can embed their summaries without extra round-trips.

use helpdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::ticket::{
    CreateTicket, JoinedTicketRow, Ticket, TicketWithRefs, UpdateTicket,
};

/// Bare ticket column list shared across write queries.
const COLUMNS: &str = "id, code, description, technician_id, client_id, status, \
                        opened_at, created_at, updated_at";

/// Ticket join with technician and client summaries, aliased to the flat
/// column names [`JoinedTicketRow`] expects.
const JOINED_SELECT: &str = "SELECT
        t.id, t.code, t.description, t.status, t.opened_at, t.created_at, t.updated_at,
        te.id AS technician_id, te.name AS technician_name, te.surname AS technician_surname,
        c.id AS client_id, c.name AS client_name, c.surname AS client_surname,
        c.email AS client_email
     FROM tickets t
     JOIN technicians te ON te.id = t.technician_id
     JOIN clients c ON c.id = t.client_id";

/// Provides CRUD operations for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Insert a new ticket, returning the created row.
    ///
    /// `status` falls back to the column default (`open`) when absent.
    pub async fn create(pool: &PgPool, input: &CreateTicket) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (code, description, technician_id, client_id, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'open'::ticket_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(&input.code)
            .bind(&input.description)
            .bind(input.technician_id)
            .bind(input.client_id)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a ticket by internal id, with references resolved.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TicketWithRefs>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE t.id = $1");
        let row = sqlx::query_as::<_, JoinedTicketRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(TicketWithRefs::from))
    }

    /// List all tickets with references resolved, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<TicketWithRefs>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY t.created_at DESC");
        let rows = sqlx::query_as::<_, JoinedTicketRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(TicketWithRefs::from).collect())
    }

    /// Update a ticket. Only non-`None` fields in `input` are applied.
    /// The code is immutable once assigned.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTicket,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET
                description = COALESCE($2, description),
                technician_id = COALESCE($3, technician_id),
                client_id = COALESCE($4, client_id),
                status = COALESCE($5, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.technician_id)
            .bind(input.client_id)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ticket. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
