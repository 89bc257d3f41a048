//! Ticket entity model and DTOs.

use helpdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Ticket workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ticket_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
}

/// Full ticket row from the `tickets` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ticket {
    pub id: DbId,
    pub code: String,
    pub description: Option<String>,
    pub technician_id: DbId,
    pub client_id: DbId,
    pub status: TicketStatus,
    pub opened_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Short technician projection embedded in ticket responses.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicianSummary {
    pub id: DbId,
    pub name: String,
    pub surname: String,
}

/// Short client projection embedded in ticket responses.
#[derive(Debug, Clone, Serialize)]
pub struct ClientSummary {
    pub id: DbId,
    pub name: String,
    pub surname: Option<String>,
    pub email: String,
}

/// Ticket with its technician and client references resolved.
#[derive(Debug, Clone, Serialize)]
pub struct TicketWithRefs {
    pub id: DbId,
    pub code: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub opened_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub technician: TechnicianSummary,
    pub client: ClientSummary,
}

/// Flat row shape produced by the ticket join query; converted into
/// [`TicketWithRefs`] by the repository.
#[derive(Debug, FromRow)]
pub(crate) struct JoinedTicketRow {
    pub id: DbId,
    pub code: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub opened_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub technician_id: DbId,
    pub technician_name: String,
    pub technician_surname: String,
    pub client_id: DbId,
    pub client_name: String,
    pub client_surname: Option<String>,
    pub client_email: String,
}

impl From<JoinedTicketRow> for TicketWithRefs {
    fn from(row: JoinedTicketRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            description: row.description,
            status: row.status,
            opened_at: row.opened_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            technician: TechnicianSummary {
                id: row.technician_id,
                name: row.technician_name,
                surname: row.technician_surname,
            },
            client: ClientSummary {
                id: row.client_id,
                name: row.client_name,
                surname: row.client_surname,
                email: row.client_email,
            },
        }
    }
}

/// DTO for creating a new ticket.
#[derive(Debug, Deserialize)]
pub struct CreateTicket {
    pub code: String,
    pub description: Option<String>,
    pub technician_id: DbId,
    pub client_id: DbId,
    pub status: Option<TicketStatus>,
}

/// DTO for updating an existing ticket. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTicket {
    pub description: Option<String>,
    pub technician_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub status: Option<TicketStatus>,
}
