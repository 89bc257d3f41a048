//! Handlers for the `/tickets` resource.
//!
//! Tickets reference a technician and a client by id. Both references are
//! checked before insert or update so the caller gets a 404 naming the
//! missing entity instead of a bare constraint failure.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::types::DbId;
use helpdesk_core::validation::require_trimmed;
use helpdesk_db::models::ticket::{CreateTicket, TicketWithRefs, UpdateTicket};
use helpdesk_db::repositories::{ClientRepo, TechnicianRepo, TicketRepo};
use helpdesk_db::DbPool;

use crate::error::AppResult;
use crate::middleware::auth::AuthAccount;
use crate::state::AppState;

/// POST /api/tickets
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(mut input): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<TicketWithRefs>)> {
    input.code = require_trimmed("code", &input.code)?;
    ensure_technician_exists(&state.pool, input.technician_id).await?;
    ensure_client_exists(&state.pool, input.client_id).await?;

    let created = TicketRepo::create(&state.pool, &input).await?;
    tracing::info!(ticket_id = created.id, code = %created.code, "Ticket created");

    // Re-read through the join so the response embeds the references.
    let ticket = TicketRepo::find_by_id(&state.pool, created.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Ticket",
            id: created.id,
        })?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// GET /api/tickets
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthAccount,
) -> AppResult<Json<Vec<TicketWithRefs>>> {
    let tickets = TicketRepo::list(&state.pool).await?;
    Ok(Json(tickets))
}

/// GET /api/tickets/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<TicketWithRefs>> {
    let ticket = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Ticket",
            id,
        })?;
    Ok(Json(ticket))
}

/// PUT /api/tickets/{id}
///
/// Partial update. The ticket `code` is immutable and not accepted here.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTicket>,
) -> AppResult<Json<TicketWithRefs>> {
    if let Some(technician_id) = input.technician_id {
        ensure_technician_exists(&state.pool, technician_id).await?;
    }
    if let Some(client_id) = input.client_id {
        ensure_client_exists(&state.pool, client_id).await?;
    }

    let updated = TicketRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Ticket",
            id,
        })?;
    tracing::info!(ticket_id = updated.id, "Ticket updated");

    let ticket = TicketRepo::find_by_id(&state.pool, updated.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Ticket",
            id: updated.id,
        })?;
    Ok(Json(ticket))
}

/// DELETE /api/tickets/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TicketRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Ticket",
            id,
        }
        .into());
    }
    tracing::info!(ticket_id = id, "Ticket deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_technician_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    if TechnicianRepo::find_by_id(pool, id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Technician",
            id,
        }
        .into());
    }
    Ok(())
}

async fn ensure_client_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    if ClientRepo::find_by_id(pool, id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Client",
            id,
        }
        .into());
    }
    Ok(())
}
